use axum::{http::StatusCode, Json};
use contracts::shared::logger::{CreateLogRequest, LogEntry, LogSource};

use crate::shared::data::db::get_connection;
use crate::shared::error::AppResult;
use crate::shared::logger::repository;

const RECENT_LOGS_LIMIT: u64 = 200;

/// POST /api/logs: запись из фронтенда
pub async fn create(Json(req): Json<CreateLogRequest>) -> AppResult<StatusCode> {
    tracing::info!("[client:{}] {}", req.category, req.message);
    repository::log_event(
        get_connection(),
        LogSource::Client.code(),
        &req.category,
        &req.message,
    )
    .await?;
    Ok(StatusCode::CREATED)
}

/// GET /api/logs
pub async fn list_recent() -> AppResult<Json<Vec<LogEntry>>> {
    Ok(Json(repository::recent_logs(get_connection(), RECENT_LOGS_LIMIT).await?))
}
