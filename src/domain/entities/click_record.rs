//! Click record entity: the per-user counter state.

/// Per-user counter record.
///
/// `total` is the authoritative click count visible to readers. `pending`
/// accumulates increments as they arrive and is never reset; the portion of
/// `pending` that has already been folded into `total` is tracked in
/// `last_reconciled_pending`. Resetting `pending` to zero instead would race
/// with concurrent increments and silently drop them.
///
/// Invariants maintained by the store:
///
/// - `total` only increases
/// - `pending` only increases
/// - `pending >= last_reconciled_pending`
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ClickRecord {
    pub user_id: i64,
    pub total: i64,
    pub pending: i64,
    pub last_reconciled_pending: i64,
}

impl ClickRecord {
    /// Clicks received since the last reconciliation pass.
    ///
    /// Non-negative as long as `pending` is monotonic.
    pub fn unreconciled(&self) -> i64 {
        self.pending - self.last_reconciled_pending
    }
}
