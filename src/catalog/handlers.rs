use super::resolver::resolve;
use super::store::PaperCatalog;
use super::types::{PaperId, PaperRecord, SearchOutcome};
use crate::errors::PortalError;
use crate::logbook::store::LogBook;
use axum::http::StatusCode;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchRequest {
    pub keyword: String,
}

#[derive(Deserialize)]
pub struct CreatePaperRequest {
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub year: Option<u32>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}

#[derive(Serialize)]
pub struct CreatePaperResponse {
    pub paper_id: String,
}

pub async fn handle_search(
    Extension(catalog): Extension<Arc<PaperCatalog>>,
    Extension(logbook): Extension<Arc<LogBook>>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchOutcome>, PortalError> {
    if req.keyword.trim().is_empty() {
        return Err(PortalError::Validation(
            "keyword must not be empty".to_string(),
        ));
    }

    let outcome = resolve(&req.keyword, &catalog, &logbook);
    tracing::info!(
        "Search for {:?}: {} result(s), suggestion: {:?}",
        req.keyword.trim(),
        outcome.results.len(),
        outcome.suggestion
    );

    Ok(Json(outcome))
}

pub async fn handle_create_paper(
    Extension(catalog): Extension<Arc<PaperCatalog>>,
    Json(req): Json<CreatePaperRequest>,
) -> (StatusCode, Json<CreatePaperResponse>) {
    let record = PaperRecord {
        id: PaperId::new(),
        title: req.title,
        author: req.author,
        year: req.year,
        abstract_text: req.abstract_text,
        keywords: req.keywords,
        file_path: req.file_path,
    };

    let paper_id = catalog.insert(record);
    tracing::info!("Registered paper {}", paper_id.0);

    (
        StatusCode::CREATED,
        Json(CreatePaperResponse {
            paper_id: paper_id.0,
        }),
    )
}

pub async fn handle_list_papers(
    Extension(catalog): Extension<Arc<PaperCatalog>>,
) -> Json<Vec<PaperRecord>> {
    Json(catalog.all())
}
