use super::aggregate::aggregate;
use super::types::{Timeframe, TrendingRecord};
use crate::errors::PortalError;
use crate::logbook::store::LogBook;
use axum::extract::Query;
use axum::{Extension, Json};
use chrono::Utc;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
pub struct TrendingParams {
    pub timeframe: Option<String>,
    pub limit: Option<usize>,
}

pub async fn handle_trending(
    Query(params): Query<TrendingParams>,
    Extension(logbook): Extension<Arc<LogBook>>,
) -> Result<Json<Vec<TrendingRecord>>, PortalError> {
    let timeframe = Timeframe::parse(params.timeframe.as_deref().unwrap_or(""))?;

    let mut records = aggregate(&logbook.list(), timeframe, Utc::now());
    if let Some(limit) = params.limit {
        records.truncate(limit);
    }

    tracing::debug!(
        "Trending ({}) computed: {} keyword(s)",
        timeframe.token(),
        records.len()
    );

    Ok(Json(records))
}
