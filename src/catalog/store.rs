//! Paper Catalog Store
//!
//! Concurrent in-memory store for the paper records the resolver searches
//! against. Populated at startup from an optional JSON seed file and at
//! runtime through the registration endpoint.

use super::types::{PaperId, PaperRecord};
use anyhow::{Context, Result};
use dashmap::DashMap;
use serde::Deserialize;

/// Seed-file record: a paper as it appears in the `PAPERS_SEED` JSON array,
/// before an id has been assigned.
#[derive(Debug, Deserialize)]
pub struct SeedPaper {
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

pub struct PaperCatalog {
    /// Paper storage, keyed by paper id.
    pub papers: DashMap<PaperId, PaperRecord>,
}

impl PaperCatalog {
    pub fn new() -> Self {
        Self {
            papers: DashMap::new(),
        }
    }

    /// Stores a record and returns its id.
    pub fn insert(&self, record: PaperRecord) -> PaperId {
        let id = record.id.clone();
        self.papers.insert(id.clone(), record);
        id
    }

    pub fn get(&self, id: &PaperId) -> Option<PaperRecord> {
        self.papers.get(id).map(|entry| entry.value().clone())
    }

    /// Returns all records ordered by title, then id, for stable listings.
    pub fn all(&self) -> Vec<PaperRecord> {
        let mut records: Vec<PaperRecord> =
            self.papers.iter().map(|entry| entry.value().clone()).collect();
        records.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.0.cmp(&b.id.0)));
        records
    }

    pub fn len(&self) -> usize {
        self.papers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.papers.is_empty()
    }

    /// Loads a JSON array of seed papers from disk, assigning fresh ids.
    /// Returns the number of records loaded.
    pub fn load_seed(&self, path: &str) -> Result<usize> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read seed file {}", path))?;
        let seeds: Vec<SeedPaper> = serde_json::from_str(&raw)
            .with_context(|| format!("seed file {} is not a JSON array of papers", path))?;

        let count = seeds.len();
        for seed in seeds {
            self.insert(PaperRecord {
                id: PaperId::new(),
                title: seed.title,
                author: seed.author,
                year: seed.year,
                abstract_text: seed.abstract_text,
                keywords: seed.keywords,
                file_path: seed.file_path,
            });
        }

        Ok(count)
    }
}
