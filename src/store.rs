//! Pool construction and table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Store URL from env `DB_URI`, default a local file next to the binary.
pub fn database_url() -> String {
    std::env::var("DB_URI").unwrap_or_else(|_| "sqlite://app.db".into())
}

/// Open a pool with foreign keys enforced; the database file is created on
/// first connect if missing.
pub async fn connect(url: &str) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(url)
        .map_err(|e| AppError::BadRequest(format!("invalid DB_URI: {}", e)))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

const TABLE_DDL: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS campers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        age INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS activities (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        difficulty INTEGER NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS signups (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        time TEXT NOT NULL,
        camper_id INTEGER NOT NULL REFERENCES campers(id) ON DELETE CASCADE,
        activity_id INTEGER NOT NULL REFERENCES activities(id) ON DELETE CASCADE
    )
    "#,
];

/// Create the three tables if absent. Deleting an activity (or camper)
/// cascades to its signups.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    for ddl in TABLE_DDL {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}
