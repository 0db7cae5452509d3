//! Shared application state injected into all handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::CounterService;
use crate::infrastructure::persistence::PgClickRepository;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub counter_service: Arc<CounterService<PgClickRepository>>,
}

impl AppState {
    pub fn new(db: Arc<PgPool>, counter_service: Arc<CounterService<PgClickRepository>>) -> Self {
        Self {
            db,
            counter_service,
        }
    }
}
