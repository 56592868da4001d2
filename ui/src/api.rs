//! Portal HTTP Client
//!
//! Typed wrapper around the portal's JSON API. Transport failures and backend
//! rejections surface as distinct `ApiError` kinds so the caller can decide
//! what to show and what to swallow.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The portal could not be reached or the response never arrived.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The portal answered with an error status; the message comes from its
    /// JSON error body when one is present.
    #[error("portal rejected the request: {0}")]
    Rejected(String),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PaperRow {
    pub title: String,
    pub author: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub file_path: Option<String>,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<PaperRow>,
    pub suggestion: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LogRow {
    pub id: String,
    pub keyword: String,
    pub date_searched: DateTime<Utc>,
    pub found_in_catalog: bool,
    pub category: Option<String>,
    pub reviewed: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TrendingRow {
    pub keyword: String,
    pub count: u64,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[derive(Deserialize)]
struct DeleteResponse {
    message: String,
}

pub struct PortalApi {
    base_url: String,
    client: reqwest::Client,
}

impl PortalApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: resolve_base_url(base_url),
            client: reqwest::Client::new(),
        }
    }

    pub async fn search(&self, keyword: &str) -> Result<SearchOutcome, ApiError> {
        let response = self
            .client
            .post(format!("{}/search", self.base_url))
            .json(&serde_json::json!({ "keyword": keyword }))
            .send()
            .await?;
        parse_json(response).await
    }

    pub async fn logs(&self) -> Result<Vec<LogRow>, ApiError> {
        let response = self
            .client
            .get(format!("{}/search/logs", self.base_url))
            .send()
            .await?;
        parse_json(response).await
    }

    pub async fn trending(&self, timeframe: &str) -> Result<Vec<TrendingRow>, ApiError> {
        let response = self
            .client
            .get(format!("{}/trending", self.base_url))
            .query(&[("timeframe", timeframe)])
            .send()
            .await?;
        parse_json(response).await
    }

    pub async fn review(&self, id: &str) -> Result<LogRow, ApiError> {
        let response = self
            .client
            .put(format!("{}/search/logs/{}", self.base_url, id))
            .send()
            .await?;
        parse_json(response).await
    }

    pub async fn delete(&self, id: &str) -> Result<String, ApiError> {
        let response = self
            .client
            .delete(format!("{}/search/logs/{}", self.base_url, id))
            .send()
            .await?;
        let body: DeleteResponse = parse_json(response).await?;
        Ok(body.message)
    }

    /// Requests a PDF report for the timeframe and returns the raw bytes.
    /// The console client sends no chart snapshot, so the portal produces the
    /// table-only variant.
    pub async fn report(&self, timeframe: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .post(format!("{}/report", self.base_url))
            .json(&serde_json::json!({ "timeframe": timeframe }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(rejection(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }
}

async fn parse_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    if !response.status().is_success() {
        return Err(rejection(response).await);
    }

    Ok(response.json::<T>().await?)
}

async fn rejection(response: reqwest::Response) -> ApiError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => ApiError::Rejected(body.error),
        Err(_) => ApiError::Rejected(status.to_string()),
    }
}

/// Normalizes the configured backend address: adds the scheme when missing
/// and strips any trailing slash.
pub fn resolve_base_url(raw: &str) -> String {
    let trimmed = raw.trim();
    let with_scheme = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    with_scheme.trim_end_matches('/').to_string()
}
