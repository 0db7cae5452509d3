//! Counter service: the public read/increment operations.

use std::sync::Arc;

use crate::domain::entities::ClickRecord;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;
use serde_json::{Value, json};

/// Service exposing the two public counter operations.
///
/// Reads return the authoritative `total` only; pending increments become
/// visible to readers once the reconciler folds them in. Increments are
/// acknowledged immediately via an atomic store-level add.
pub struct CounterService<R: ClickRepository> {
    repository: Arc<R>,
}

impl<R: ClickRepository> CounterService<R> {
    /// Creates a new counter service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the authoritative click total for a user.
    ///
    /// Never creates a record and never triggers reconciliation.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user has no record.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_total(&self, user_id: i64) -> Result<i64, AppError> {
        let record = self
            .repository
            .get(user_id)
            .await?
            .ok_or_else(|| AppError::not_found("User not found", Value::Null))?;

        Ok(record.total)
    }

    /// Records `delta` clicks for a user, creating the record on first use.
    ///
    /// The increment lands in the record's `pending` counter as one atomic
    /// add, so concurrent calls for the same user are all reflected. Returns
    /// the post-increment record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `delta` is not positive; the
    /// record is not touched in that case.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn add_clicks(&self, user_id: i64, delta: i64) -> Result<ClickRecord, AppError> {
        if delta <= 0 {
            return Err(AppError::bad_request(
                "clicks must be a positive integer",
                json!({ "clicks": delta }),
            ));
        }

        self.repository.add_pending(user_id, delta).await
    }
}
