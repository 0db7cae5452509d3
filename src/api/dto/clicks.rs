//! DTOs for the click counter endpoints.
//!
//! Wire field names (`userID`, `lastReconciledPending`) follow the persisted
//! record layout rather than Rust naming.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::ClickRecord;

/// Query parameters for `GET /api/clicks`.
#[derive(Debug, Deserialize)]
pub struct GetClicksParams {
    #[serde(rename = "userID")]
    pub user_id: i64,
}

/// Response body for `GET /api/clicks`: the authoritative total only.
#[derive(Debug, Serialize)]
pub struct ClicksResponse {
    pub clicks: i64,
}

/// Request body for `POST /api/clicks`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddClicksRequest {
    #[serde(rename = "userID")]
    pub user_id: i64,

    #[validate(range(min = 1, message = "clicks must be a positive integer"))]
    pub clicks: i64,
}

/// Full record returned by `POST /api/clicks`, reflecting the
/// post-increment state.
#[derive(Debug, Serialize)]
pub struct ClickRecordResponse {
    #[serde(rename = "userID")]
    pub user_id: i64,
    pub total: i64,
    pub pending: i64,
    #[serde(rename = "lastReconciledPending")]
    pub last_reconciled_pending: i64,
}

impl From<ClickRecord> for ClickRecordResponse {
    fn from(record: ClickRecord) -> Self {
        Self {
            user_id: record.user_id,
            total: record.total,
            pending: record.pending,
            last_reconciled_pending: record.last_reconciled_pending,
        }
    }
}
