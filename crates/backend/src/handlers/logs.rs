use axum::http::StatusCode;
use axum::Json;
use contracts::shared::logger::{CreateLogRequest, LogEntry};

use crate::shared::logger;

/// GET /api/logs
pub async fn list_all() -> Json<Vec<LogEntry>> {
    Json(logger::repository::get_all_logs())
}

/// POST /api/logs
pub async fn create(Json(req): Json<CreateLogRequest>) -> StatusCode {
    if req.category.trim().is_empty() {
        return StatusCode::BAD_REQUEST;
    }
    logger::repository::log_event(&req.source, &req.category, &req.message);
    StatusCode::OK
}

/// DELETE /api/logs
pub async fn clear_all() -> StatusCode {
    logger::repository::clear_all_logs();
    StatusCode::OK
}
