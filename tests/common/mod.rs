#![allow(dead_code)]

use click_counter::application::services::CounterService;
use click_counter::domain::entities::ClickRecord;
use click_counter::infrastructure::persistence::PgClickRepository;
use click_counter::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let repository = Arc::new(PgClickRepository::new(pool.clone()));
    let counter_service = Arc::new(CounterService::new(repository));

    AppState::new(pool, counter_service)
}

pub fn create_repository(pool: PgPool) -> Arc<PgClickRepository> {
    Arc::new(PgClickRepository::new(Arc::new(pool)))
}

pub async fn insert_record(
    pool: &PgPool,
    user_id: i64,
    total: i64,
    pending: i64,
    last_reconciled_pending: i64,
) {
    sqlx::query(
        "INSERT INTO click_records (user_id, total, pending, last_reconciled_pending)
         VALUES ($1, $2, $3, $4)",
    )
    .bind(user_id)
    .bind(total)
    .bind(pending)
    .bind(last_reconciled_pending)
    .execute(pool)
    .await
    .unwrap();
}

pub async fn fetch_record(pool: &PgPool, user_id: i64) -> Option<ClickRecord> {
    sqlx::query_as::<_, ClickRecord>(
        "SELECT user_id, total, pending, last_reconciled_pending
         FROM click_records
         WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
    .unwrap()
}
