//! Search Log Store
//!
//! Concurrent in-memory store for search log entries. Entries are created by
//! the resolver, mutated only through `mark_reviewed`, and removed only
//! through `delete`. Listing always reflects the current entry set ordered
//! most recent first.

use super::types::{LogId, SearchLogEntry};
use crate::errors::PortalError;
use chrono::Utc;
use dashmap::DashMap;

pub struct LogBook {
    /// Entry storage, keyed by log id.
    /// `DashMap` keeps concurrent searches from contending on a single lock.
    pub entries: DashMap<LogId, SearchLogEntry>,
}

impl LogBook {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Appends a new entry for a resolved search.
    ///
    /// The keyword is stored trimmed but otherwise as submitted; id and
    /// timestamp are assigned here and never change afterwards.
    pub fn record(
        &self,
        keyword: &str,
        found_in_catalog: bool,
        category: Option<String>,
    ) -> SearchLogEntry {
        let entry = SearchLogEntry {
            id: LogId::new(),
            keyword: keyword.trim().to_string(),
            date_searched: Utc::now(),
            found_in_catalog,
            category,
            reviewed: false,
        };

        self.entries.insert(entry.id.clone(), entry.clone());
        tracing::debug!(
            "Recorded search log {} for {:?} (hit: {})",
            entry.id.0,
            entry.keyword,
            found_in_catalog
        );

        entry
    }

    /// Returns all entries, most recent first.
    /// Entries sharing a timestamp fall back to id order so concurrent
    /// arrivals still list the same way on every call.
    pub fn list(&self) -> Vec<SearchLogEntry> {
        let mut entries: Vec<SearchLogEntry> =
            self.entries.iter().map(|entry| entry.value().clone()).collect();

        entries.sort_by(|a, b| {
            b.date_searched
                .cmp(&a.date_searched)
                .then_with(|| b.id.0.cmp(&a.id.0))
        });

        entries
    }

    /// Flags an external miss as reviewed.
    ///
    /// Entries that were found in the catalog are not reviewable and fail
    /// with `InvalidState`. Reviewing an already-reviewed entry is a no-op
    /// that returns the unchanged entry.
    pub fn mark_reviewed(&self, id: &LogId) -> Result<SearchLogEntry, PortalError> {
        if let Some(mut entry) = self.entries.get_mut(id) {
            if entry.found_in_catalog {
                return Err(PortalError::InvalidState(format!(
                    "log entry {} was found in the catalog and cannot be reviewed",
                    id.0
                )));
            }

            entry.reviewed = true;
            return Ok(entry.clone());
        }

        Err(PortalError::NotFound(format!(
            "log entry {} does not exist",
            id.0
        )))
    }

    /// Permanently removes an entry. Deleted entries no longer appear in
    /// listings or aggregations.
    pub fn delete(&self, id: &LogId) -> Result<(), PortalError> {
        match self.entries.remove(id) {
            Some(_) => Ok(()),
            None => Err(PortalError::NotFound(format!(
                "log entry {} does not exist",
                id.0
            ))),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
