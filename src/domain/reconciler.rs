//! Periodic reconciliation of pending clicks into authoritative totals.
//!
//! The reconciler is an explicit scheduled task owned by the server
//! lifecycle: spawned on startup (see [`crate::server::run`]) and aborted on
//! shutdown. Each tick runs one [`reconcile_pass`] that folds every record's
//! unreconciled pending clicks into its total, exactly once each.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::MissedTickBehavior;

use crate::domain::repositories::ClickRepository;

/// Outcome of a single reconciliation pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PassSummary {
    /// Records whose pending clicks were folded into their total.
    pub folded: usize,
    /// Records whose fold failed; retried naturally on the next tick.
    pub failed: usize,
}

/// Runs reconciliation passes forever, one per `period`.
///
/// Passes never overlap: the loop awaits each pass to completion, and a pass
/// slower than the period skips the missed ticks instead of bursting to
/// catch up. A failed pass is logged and the schedule continues.
pub async fn run_reconciler<R: ClickRepository>(repository: Arc<R>, period: Duration) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        ticker.tick().await;

        let summary = reconcile_pass(repository.as_ref()).await;
        if summary.folded > 0 || summary.failed > 0 {
            tracing::info!(
                folded = summary.folded,
                failed = summary.failed,
                "reconciliation pass finished"
            );
        }
    }
}

/// Runs a single reconciliation pass over all unreconciled records.
///
/// Each record is folded independently via
/// [`ClickRepository::fold_pending`]; a failure on one record is logged and
/// does not block the others. The pass is idempotent: with no intervening
/// increments a repeated fold matches nothing, so nothing is double-counted.
pub async fn reconcile_pass<R: ClickRepository + ?Sized>(repository: &R) -> PassSummary {
    let user_ids = match repository.list_unreconciled().await {
        Ok(ids) => ids,
        Err(e) => {
            tracing::error!(error = %e, "skipping reconciliation pass: cannot list unreconciled records");
            return PassSummary::default();
        }
    };

    let mut summary = PassSummary::default();

    for user_id in user_ids {
        match repository.fold_pending(user_id).await {
            Ok(Some(record)) => {
                summary.folded += 1;
                tracing::debug!(user_id, total = record.total, "folded pending clicks");
            }
            // Raced with another fold of the same record; nothing left to do.
            Ok(None) => {}
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(user_id, error = %e, "failed to fold pending clicks");
            }
        }
    }

    summary
}
