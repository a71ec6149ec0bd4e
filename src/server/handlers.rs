//! Time log API request handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use super::AppState;
use crate::errors::AppError;
use crate::models::LogRecord;

type JsonBody = Result<Json<Map<String, Value>>, JsonRejection>;
type LogId = Result<Path<u64>, PathRejection>;

/// Response body for `POST /api/logs`.
#[derive(Serialize)]
pub(crate) struct CreateLogResponse {
    pub message: &'static str,
    pub log: LogRecord,
}

fn object_body(body: JsonBody) -> Result<Map<String, Value>, AppError> {
    body.map(|Json(map)| map)
        .map_err(|e| AppError::InvalidBody(e.body_text()))
}

fn log_id(id: LogId) -> Result<u64, AppError> {
    id.map(|Path(id)| id)
        .map_err(|e| AppError::InvalidArgument(e.body_text()))
}

pub(crate) async fn root() -> &'static str {
    "Time Sheet Tracker API is running! Use /api/logs for time log operations."
}

// -----------------------------------------------------------------------
// GET /api/logs
// -----------------------------------------------------------------------

pub(crate) async fn list_logs(
    State(state): State<AppState>,
) -> Result<Json<Vec<LogRecord>>, AppError> {
    let logs = state.with_store(|s| Ok(s.list().to_vec())).await?;
    Ok(Json(logs))
}

// -----------------------------------------------------------------------
// GET /api/logs/{id}
// -----------------------------------------------------------------------

pub(crate) async fn get_log(
    State(state): State<AppState>,
    id: LogId,
) -> Result<Json<LogRecord>, AppError> {
    let id = log_id(id)?;
    let log = state.with_store(move |s| s.get(id).cloned()).await?;
    Ok(Json(log))
}

// -----------------------------------------------------------------------
// POST /api/logs
// -----------------------------------------------------------------------

pub(crate) async fn create_log(
    State(state): State<AppState>,
    body: JsonBody,
) -> Result<(StatusCode, Json<CreateLogResponse>), AppError> {
    let input = object_body(body)?;
    let log = state.with_store(move |s| s.create(&input)).await?;

    info!(id = log.id, "log_created");

    Ok((
        StatusCode::CREATED,
        Json(CreateLogResponse {
            message: "Log created successfully",
            log,
        }),
    ))
}

// -----------------------------------------------------------------------
// PUT /api/logs/{id}
// -----------------------------------------------------------------------

pub(crate) async fn update_log(
    State(state): State<AppState>,
    id: LogId,
    body: JsonBody,
) -> Result<Json<LogRecord>, AppError> {
    let id = log_id(id)?;
    let patch = object_body(body)?;
    let log = state.with_store(move |s| s.update(id, &patch)).await?;

    info!(id, "log_updated");

    Ok(Json(log))
}

// -----------------------------------------------------------------------
// DELETE /api/logs/{id}
// -----------------------------------------------------------------------

pub(crate) async fn delete_log(
    State(state): State<AppState>,
    id: LogId,
) -> Result<StatusCode, AppError> {
    let id = log_id(id)?;
    state.with_store(move |s| s.delete(id)).await?;

    info!(id, "log_deleted");

    Ok(StatusCode::NO_CONTENT)
}
