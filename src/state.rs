//! Shared application state for all routes.

use sqlx::SqlitePool;

/// Passed into every handler; construct independently in tests.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}
