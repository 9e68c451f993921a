//! Activity handlers: list, delete.

use crate::error::AppError;
use crate::service::ActivityService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let activities = ActivityService::list(&state.pool).await?;
    Ok((StatusCode::OK, Json(activities)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if !ActivityService::delete(&state.pool, id).await? {
        return Err(AppError::NotFound("Activity not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
