use crate::errors::PortalError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeframe {
    AllTime,
    Month,
    Year,
}

impl Timeframe {
    /// Parses the wire token used by the dashboard and the report request.
    /// Tokens are matched case-insensitively; a missing or empty token means
    /// the all-time view.
    pub fn parse(token: &str) -> Result<Self, PortalError> {
        match token.trim().to_lowercase().as_str() {
            "" | "alltime" => Ok(Timeframe::AllTime),
            "month" => Ok(Timeframe::Month),
            "year" => Ok(Timeframe::Year),
            other => Err(PortalError::Validation(format!(
                "unknown timeframe {:?}, expected alltime, month or year",
                other
            ))),
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Timeframe::AllTime => "alltime",
            Timeframe::Month => "month",
            Timeframe::Year => "year",
        }
    }

    /// Human-readable form used in the report heading.
    pub fn label(&self) -> &'static str {
        match self {
            Timeframe::AllTime => "All Time",
            Timeframe::Month => "Last Month",
            Timeframe::Year => "Last Year",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingRecord {
    pub keyword: String,
    pub count: u64,
}
