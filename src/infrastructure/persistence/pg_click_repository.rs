//! PostgreSQL implementation of the click record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::ClickRecord;
use crate::domain::repositories::ClickRepository;
use crate::error::AppError;

/// PostgreSQL repository for per-user click records.
///
/// Increments and folds are each a single SQL statement, giving row-level
/// atomicity without explicit transactions or cross-record locking.
pub struct PgClickRepository {
    pool: Arc<PgPool>,
}

impl PgClickRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ClickRepository for PgClickRepository {
    async fn get(&self, user_id: i64) -> Result<Option<ClickRecord>, AppError> {
        let record = sqlx::query_as::<_, ClickRecord>(
            r#"
            SELECT user_id, total, pending, last_reconciled_pending
            FROM click_records
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn add_pending(&self, user_id: i64, delta: i64) -> Result<ClickRecord, AppError> {
        let record = sqlx::query_as::<_, ClickRecord>(
            r#"
            INSERT INTO click_records (user_id, pending)
            VALUES ($1, $2)
            ON CONFLICT (user_id)
            DO UPDATE SET pending = click_records.pending + EXCLUDED.pending
            RETURNING user_id, total, pending, last_reconciled_pending
            "#,
        )
        .bind(user_id)
        .bind(delta)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn list_unreconciled(&self) -> Result<Vec<i64>, AppError> {
        let ids = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT user_id
            FROM click_records
            WHERE pending > last_reconciled_pending
            ORDER BY user_id
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(ids)
    }

    async fn fold_pending(&self, user_id: i64) -> Result<Option<ClickRecord>, AppError> {
        // Every column reference on the right-hand side reads the pre-update
        // row, so the delta and the snapshot refresh come from one consistent
        // per-record snapshot, applied atomically. Increments racing with the
        // fold only grow `pending` and are picked up by the next pass.
        let record = sqlx::query_as::<_, ClickRecord>(
            r#"
            UPDATE click_records
            SET total = total + (pending - last_reconciled_pending),
                last_reconciled_pending = pending
            WHERE user_id = $1
              AND pending > last_reconciled_pending
            RETURNING user_id, total, pending, last_reconciled_pending
            "#,
        )
        .bind(user_id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }
}
