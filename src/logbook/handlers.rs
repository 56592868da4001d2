use super::store::LogBook;
use super::types::{LogId, SearchLogEntry};
use crate::errors::PortalError;
use axum::extract::Path;
use axum::{Extension, Json};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
pub struct DeleteLogResponse {
    pub message: String,
}

pub async fn handle_list_logs(
    Extension(logbook): Extension<Arc<LogBook>>,
) -> Json<Vec<SearchLogEntry>> {
    Json(logbook.list())
}

pub async fn handle_review_log(
    Extension(logbook): Extension<Arc<LogBook>>,
    Path(id): Path<String>,
) -> Result<Json<SearchLogEntry>, PortalError> {
    let entry = logbook.mark_reviewed(&LogId(id))?;
    tracing::info!("Marked search log {} as reviewed", entry.id.0);
    Ok(Json(entry))
}

pub async fn handle_delete_log(
    Extension(logbook): Extension<Arc<LogBook>>,
    Path(id): Path<String>,
) -> Result<Json<DeleteLogResponse>, PortalError> {
    let id = LogId(id);
    logbook.delete(&id)?;
    tracing::info!("Deleted search log {}", id.0);

    Ok(Json(DeleteLogResponse {
        message: "Search log deleted successfully".to_string(),
    }))
}
