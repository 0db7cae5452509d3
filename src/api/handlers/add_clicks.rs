//! Handler for reporting incremental clicks.

use axum::extract::State;
use validator::Validate;

use crate::api::dto::clicks::{AddClicksRequest, ClickRecordResponse};
use crate::api::extract::Json;
use crate::error::AppError;
use crate::state::AppState;

/// Records incremental clicks for a user, creating the record on first use.
///
/// # Endpoint
///
/// `POST /api/clicks`
///
/// # Request Body
///
/// ```json
/// { "userID": 42, "clicks": 5 }
/// ```
///
/// # Response
///
/// The post-increment record. The increment lands in `pending` immediately;
/// the reconciler folds it into `total` on its next pass.
///
/// ```json
/// {
///   "userID": 42,
///   "total": 0,
///   "pending": 5,
///   "lastReconciledPending": 0
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when `clicks` is missing or not a positive
/// integer; the record is not mutated in that case.
pub async fn add_clicks_handler(
    State(state): State<AppState>,
    Json(payload): Json<AddClicksRequest>,
) -> Result<Json<ClickRecordResponse>, AppError> {
    payload.validate()?;

    let record = state
        .counter_service
        .add_clicks(payload.user_id, payload.clicks)
        .await?;

    Ok(Json(record.into()))
}
