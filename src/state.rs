//! Shared application state for all routes.

use sqlx::PgPool;

/// Injected into every handler. Cloning shares the same pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
