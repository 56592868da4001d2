use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaperId(pub String);

impl PaperId {
    pub fn new() -> Self {
        PaperId(uuid::Uuid::new_v4().to_string())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaperRecord {
    pub id: PaperId,
    pub title: String,
    pub author: String,
    pub year: Option<u32>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub file_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaperSummary {
    pub title: String,
    pub author: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub file_path: Option<String>,
    pub source: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub results: Vec<PaperSummary>,
    pub suggestion: Option<String>,
}
