//! Log ingestion and query handlers.

use axum::Json;
use axum::extract::State;

use loghub_entity::LogEntry;

use crate::dto::request::{LogStringQuery, SourceQuery, TimestampQuery};
use crate::error::ApiError;
use crate::extractors::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// GET /logs/level/{level}
pub async fn get_logs_by_level(
    State(state): State<AppState>,
    ApiPath(level): ApiPath<String>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let logs = state.log_service.get_by_level(&level).await?;
    Ok(Json(logs))
}

/// GET /logs/log_string?log_string=
pub async fn get_logs_by_log_string(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LogStringQuery>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let logs = state
        .log_service
        .get_by_log_string(&query.log_string)
        .await?;
    Ok(Json(logs))
}

/// GET /logs/timestamp?timestamp=
pub async fn get_logs_by_timestamp(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<TimestampQuery>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let logs = state.log_service.get_by_timestamp(&query.timestamp).await?;
    Ok(Json(logs))
}

/// GET /logs/metadata/source?source=
pub async fn get_logs_by_metadata_source(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SourceQuery>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let logs = state
        .log_service
        .get_by_metadata_source(&query.source)
        .await?;
    Ok(Json(logs))
}

/// POST /logs
pub async fn create_logs(
    State(state): State<AppState>,
    ApiJson(entries): ApiJson<Vec<LogEntry>>,
) -> Result<Json<Vec<LogEntry>>, ApiError> {
    let inserted = state.log_service.create_logs(entries).await?;
    Ok(Json(inserted))
}
