//! Camper handlers: list, create, read, update.

use crate::error::AppError;
use crate::models::{CamperDetail, CamperSummary};
use crate::service::CamperService;
use crate::state::AppState;
use crate::validation::camper_payload;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

const CAMPER_NOT_FOUND: &str = "Camper not found";

pub async fn list(
    State(state): State<AppState>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let campers = CamperService::list(&state.pool).await?;
    let summaries: Vec<CamperSummary> = campers.into_iter().map(Into::into).collect();
    Ok((StatusCode::OK, Json(summaries)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let payload = camper_payload(&body)?;
    let camper = CamperService::create(&state.pool, &payload).await?;
    // A fresh camper has no signups yet.
    Ok((
        StatusCode::CREATED,
        Json(CamperDetail::new(camper, Vec::new())),
    ))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let camper = CamperService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(CAMPER_NOT_FOUND.into()))?;
    let signups = CamperService::signups(&state.pool, id).await?;
    Ok((StatusCode::OK, Json(CamperDetail::new(camper, signups))))
}

/// Overwrites both name and age; the same age/name rules as create apply.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    if CamperService::find(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(CAMPER_NOT_FOUND.into()));
    }
    let payload = camper_payload(&body)?;
    let camper = CamperService::update(&state.pool, id, &payload)
        .await?
        .ok_or_else(|| AppError::NotFound(CAMPER_NOT_FOUND.into()))?;
    Ok((StatusCode::ACCEPTED, Json(CamperSummary::from(camper))))
}
