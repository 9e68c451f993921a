//! Activity data access.

use crate::error::AppError;
use crate::models::Activity;
use sqlx::SqlitePool;

pub struct ActivityService;

impl ActivityService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Activity>, AppError> {
        let rows = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities ORDER BY id",
        )
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Activity>, AppError> {
        let row = sqlx::query_as::<_, Activity>(
            "SELECT id, name, difficulty FROM activities WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    pub async fn create(
        pool: &SqlitePool,
        name: &str,
        difficulty: i64,
    ) -> Result<Activity, AppError> {
        let row = sqlx::query_as::<_, Activity>(
            "INSERT INTO activities (name, difficulty) VALUES (?1, ?2) RETURNING id, name, difficulty",
        )
        .bind(name)
        .bind(difficulty)
        .fetch_one(pool)
        .await?;
        Ok(row)
    }

    /// Returns false when the id does not exist. Signups cascade.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM activities WHERE id = ?1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::debug!(id, "activity deleted");
        }
        Ok(deleted)
    }
}
