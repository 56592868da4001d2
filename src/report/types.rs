use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ReportRequest {
    #[serde(default)]
    pub timeframe: Option<String>,
    /// Base64 PNG or data URL exported from the dashboard chart. The camelCase
    /// spelling is what the chart widget sends; both are accepted.
    #[serde(default, alias = "chartImage")]
    pub chart_image: Option<String>,
}
