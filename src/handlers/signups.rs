//! Signup handler: create.

use crate::error::AppError;
use crate::models::SignupDetail;
use crate::service::{ActivityService, CamperService, SignupService};
use crate::state::AppState;
use crate::validation::signup_payload;
use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;

/// Verifies both referenced rows exist before inserting, so a bad id comes
/// back as a named message rather than a constraint violation.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let payload = signup_payload(&body)?;

    let camper = CamperService::find(&state.pool, payload.camper_id).await?;
    let activity = ActivityService::find(&state.pool, payload.activity_id).await?;
    let (camper, activity) = match (camper, activity) {
        (Some(c), Some(a)) => (c, a),
        (camper, activity) => {
            let mut errors = Vec::new();
            if camper.is_none() {
                errors.push(format!("Camper {} not found", payload.camper_id));
            }
            if activity.is_none() {
                errors.push(format!("Activity {} not found", payload.activity_id));
            }
            return Err(AppError::Validation(errors));
        }
    };

    let signup = SignupService::create(&state.pool, &payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(SignupDetail::new(signup, camper, activity)),
    ))
}
