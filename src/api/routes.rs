//! API route configuration.

use crate::api::handlers::{add_clicks_handler, get_clicks_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Counter API routes.
///
/// # Endpoints
///
/// - `GET  /clicks?userID=<int>` - Read a user's reconciled click total
/// - `POST /clicks`              - Report incremental clicks for a user
pub fn api_routes() -> Router<AppState> {
    Router::new().route(
        "/clicks",
        get(get_clicks_handler).post(add_clicks_handler),
    )
}
