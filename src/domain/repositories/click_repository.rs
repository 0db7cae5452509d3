//! Repository trait for per-user click records.

use crate::domain::entities::ClickRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the durable click record store.
///
/// All mutation goes through atomic per-record operations: increments are
/// applied as atomic adds at the store level (never read-modify-write), and
/// reconciliation folds are single-statement updates derived from one
/// consistent per-record snapshot.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgClickRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_clicks.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClickRepository: Send + Sync {
    /// Reads the record for a user.
    ///
    /// Returns `Ok(None)` when the user has never been seen. Never creates
    /// a record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn get(&self, user_id: i64) -> Result<Option<ClickRecord>, AppError>;

    /// Atomically adds `delta` to a user's pending clicks, creating the
    /// record (with zero total) if it does not exist.
    ///
    /// Concurrent calls for the same user are all reflected: the increment
    /// is a single atomic statement, so no update is ever lost.
    ///
    /// Returns the post-increment record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn add_pending(&self, user_id: i64, delta: i64) -> Result<ClickRecord, AppError>;

    /// Lists users whose `pending` has grown past `last_reconciled_pending`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_unreconciled(&self) -> Result<Vec<i64>, AppError>;

    /// Folds a user's unreconciled pending clicks into their total.
    ///
    /// Applies `total += pending - last_reconciled_pending` and refreshes
    /// `last_reconciled_pending` to the observed `pending`, all from a single
    /// consistent snapshot of the record. Increments racing with the fold
    /// only grow `pending` further and are picked up by the next pass.
    ///
    /// Returns `Ok(None)` when there is nothing to fold, which makes repeated
    /// folds with no intervening increments no-ops.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn fold_pending(&self, user_id: i64) -> Result<Option<ClickRecord>, AppError>;
}
