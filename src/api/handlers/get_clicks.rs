//! Handler for reading a user's click total.

use axum::extract::State;

use crate::api::dto::clicks::{ClicksResponse, GetClicksParams};
use crate::api::extract::{Json, Query};
use crate::error::AppError;
use crate::state::AppState;

/// Returns the authoritative click total for a user.
///
/// # Endpoint
///
/// `GET /api/clicks?userID=<int>`
///
/// # Response
///
/// ```json
/// { "clicks": 8 }
/// ```
///
/// Only reconciled clicks are reported; increments still pending become
/// visible after the next reconciliation pass.
///
/// # Errors
///
/// Returns 404 Not Found if the user has never reported clicks.
/// Returns 400 Bad Request if `userID` is missing or not an integer.
pub async fn get_clicks_handler(
    State(state): State<AppState>,
    Query(params): Query<GetClicksParams>,
) -> Result<Json<ClicksResponse>, AppError> {
    let clicks = state.counter_service.get_total(params.user_id).await?;

    Ok(Json(ClicksResponse { clicks }))
}
