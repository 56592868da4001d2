use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub String);

impl LogId {
    pub fn new() -> Self {
        LogId(uuid::Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchLogEntry {
    pub id: LogId,
    pub keyword: String,
    pub date_searched: DateTime<Utc>,
    pub found_in_catalog: bool,
    pub category: Option<String>,
    pub reviewed: bool,
}
