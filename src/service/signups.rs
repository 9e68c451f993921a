//! Signup data access.

use crate::error::AppError;
use crate::models::Signup;
use crate::validation::SignupPayload;
use sqlx::SqlitePool;

pub struct SignupService;

impl SignupService {
    /// Callers verify the referenced camper and activity exist first; the
    /// foreign keys are a backstop, not the error path.
    pub async fn create(pool: &SqlitePool, payload: &SignupPayload) -> Result<Signup, AppError> {
        let row = sqlx::query_as::<_, Signup>(
            r#"
            INSERT INTO signups (time, camper_id, activity_id)
            VALUES (?1, ?2, ?3)
            RETURNING id, time, camper_id, activity_id
            "#,
        )
        .bind(&payload.time)
        .bind(payload.camper_id)
        .bind(payload.activity_id)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id = row.id, "signup created");
        Ok(row)
    }
}
