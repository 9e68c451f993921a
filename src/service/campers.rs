//! Camper data access.

use crate::error::AppError;
use crate::models::{Activity, Camper, SignupWithActivity};
use crate::validation::CamperPayload;
use sqlx::{FromRow, SqlitePool};

pub struct CamperService;

impl CamperService {
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Camper>, AppError> {
        let rows = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Camper>, AppError> {
        let row = sqlx::query_as::<_, Camper>("SELECT id, name, age FROM campers WHERE id = ?1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }

    pub async fn create(pool: &SqlitePool, payload: &CamperPayload) -> Result<Camper, AppError> {
        let row = sqlx::query_as::<_, Camper>(
            "INSERT INTO campers (name, age) VALUES (?1, ?2) RETURNING id, name, age",
        )
        .bind(&payload.name)
        .bind(payload.age)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id = row.id, "camper created");
        Ok(row)
    }

    /// Overwrites both fields. Returns None when the id does not exist.
    pub async fn update(
        pool: &SqlitePool,
        id: i64,
        payload: &CamperPayload,
    ) -> Result<Option<Camper>, AppError> {
        let row = sqlx::query_as::<_, Camper>(
            "UPDATE campers SET name = ?1, age = ?2 WHERE id = ?3 RETURNING id, name, age",
        )
        .bind(&payload.name)
        .bind(payload.age)
        .bind(id)
        .fetch_optional(pool)
        .await?;
        Ok(row)
    }

    /// The camper's signups, each joined with its activity.
    pub async fn signups(
        pool: &SqlitePool,
        camper_id: i64,
    ) -> Result<Vec<SignupWithActivity>, AppError> {
        #[derive(FromRow)]
        struct Row {
            id: i64,
            time: String,
            camper_id: i64,
            activity_id: i64,
            activity_name: String,
            activity_difficulty: i64,
        }

        let rows = sqlx::query_as::<_, Row>(
            r#"
            SELECT s.id, s.time, s.camper_id, s.activity_id,
                   a.name AS activity_name, a.difficulty AS activity_difficulty
            FROM signups s
            JOIN activities a ON a.id = s.activity_id
            WHERE s.camper_id = ?1
            ORDER BY s.id
            "#,
        )
        .bind(camper_id)
        .fetch_all(pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| SignupWithActivity {
                id: r.id,
                time: r.time,
                camper_id: r.camper_id,
                activity_id: r.activity_id,
                activity: Activity {
                    id: r.activity_id,
                    name: r.activity_name,
                    difficulty: r.activity_difficulty,
                },
            })
            .collect())
    }
}
