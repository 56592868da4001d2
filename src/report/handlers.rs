use super::pdf::render_report;
use super::snapshot::decode_snapshot;
use super::types::ReportRequest;
use crate::errors::PortalError;
use crate::logbook::store::LogBook;
use crate::trending::aggregate::aggregate;
use crate::trending::types::Timeframe;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use chrono::Utc;
use std::sync::Arc;

pub async fn handle_report(
    Extension(logbook): Extension<Arc<LogBook>>,
    Json(req): Json<ReportRequest>,
) -> Result<Response, PortalError> {
    let timeframe = Timeframe::parse(req.timeframe.as_deref().unwrap_or(""))?;

    // An unusable snapshot downgrades the document to table-only
    let snapshot = match req.chart_image.as_deref() {
        Some(raw) => match decode_snapshot(raw) {
            Ok(snapshot) => Some(snapshot),
            Err(e) => {
                tracing::warn!("Ignoring unusable chart snapshot: {:#}", e);
                None
            }
        },
        None => None,
    };

    let now = Utc::now();
    let records = aggregate(&logbook.list(), timeframe, now);
    let pdf = render_report(timeframe, &records, snapshot, now)?;

    tracing::info!(
        "Generated {} report: {} keyword(s), {} bytes",
        timeframe.token(),
        records.len(),
        pdf.len()
    );

    let headers = [
        (header::CONTENT_TYPE, "application/pdf".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"trending_report_{}.pdf\"",
                timeframe.token()
            ),
        ),
    ];

    Ok((StatusCode::OK, headers, pdf).into_response())
}
