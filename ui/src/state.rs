//! Client-Side State
//!
//! The search flow is an explicit finite-state machine with pure transition
//! functions. Transitions never perform I/O themselves; `submit` and
//! `accept_suggestion` hand back a `SearchCommand` naming the request the
//! driver must issue, and the eventual response re-enters through `complete`
//! or `fail` carrying the command's sequence number. A completion whose
//! sequence no longer matches the in-flight search is stale and dropped.
//!
//! The dashboard feeds use the same idea: every poll request takes a fresh
//! sequence number, and a response is applied only if it is newer than the
//! last one applied, so an overtaken response can never overwrite fresher
//! data.

use crate::api::{PaperRow, SearchOutcome};

#[derive(Debug, Clone, PartialEq)]
pub enum SearchPhase {
    Idle,
    Searching { query: String, seq: u64 },
    ResultsShown { query: String, results: Vec<PaperRow> },
    SuggestionShown { query: String, suggestion: String },
    ErrorShown { query: String, message: String },
}

/// A search request the driver must perform, tagged with the sequence number
/// its completion must carry.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchCommand {
    pub query: String,
    pub seq: u64,
}

pub struct SearchController {
    phase: SearchPhase,
    next_seq: u64,
}

impl SearchController {
    pub fn new() -> Self {
        Self {
            phase: SearchPhase::Idle,
            next_seq: 0,
        }
    }

    pub fn phase(&self) -> &SearchPhase {
        &self.phase
    }

    /// Starts a new search. Blank input produces no command and leaves the
    /// current phase untouched.
    pub fn submit(&mut self, input: &str) -> Option<SearchCommand> {
        let query = input.trim();
        if query.is_empty() {
            return None;
        }

        self.next_seq += 1;
        let seq = self.next_seq;
        self.phase = SearchPhase::Searching {
            query: query.to_string(),
            seq,
        };

        Some(SearchCommand {
            query: query.to_string(),
            seq,
        })
    }

    /// Resubmits the offered suggestion as a brand-new search. Only valid
    /// while a suggestion is on screen.
    pub fn accept_suggestion(&mut self) -> Option<SearchCommand> {
        let SearchPhase::SuggestionShown { suggestion, .. } = &self.phase else {
            return None;
        };

        let suggestion = suggestion.clone();
        self.submit(&suggestion)
    }

    /// Applies a search response. Ignored unless `seq` matches the in-flight
    /// search.
    pub fn complete(&mut self, seq: u64, outcome: SearchOutcome) {
        let SearchPhase::Searching { query, seq: current } = &self.phase else {
            return;
        };
        if *current != seq {
            return;
        }

        let query = query.clone();
        self.phase = if !outcome.results.is_empty() {
            SearchPhase::ResultsShown {
                query,
                results: outcome.results,
            }
        } else if let Some(suggestion) = outcome.suggestion {
            SearchPhase::SuggestionShown { query, suggestion }
        } else {
            // A miss with no suggestion still shows an (empty) result list
            SearchPhase::ResultsShown {
                query,
                results: Vec::new(),
            }
        };
    }

    /// Applies a search failure. Ignored unless `seq` matches the in-flight
    /// search.
    pub fn fail(&mut self, seq: u64, message: &str) {
        let SearchPhase::Searching { query, seq: current } = &self.phase else {
            return;
        };
        if *current != seq {
            return;
        }

        let query = query.clone();
        self.phase = SearchPhase::ErrorShown {
            query,
            message: message.to_string(),
        };
    }
}

/// Latest-wins holder for one dashboard feed.
pub struct FeedState<T> {
    latest: Option<T>,
    last_applied: u64,
    next_seq: u64,
}

impl<T> FeedState<T> {
    pub fn new() -> Self {
        Self {
            latest: None,
            last_applied: 0,
            next_seq: 0,
        }
    }

    /// Hands out the sequence number for the next outgoing request.
    pub fn begin_request(&mut self) -> u64 {
        self.next_seq += 1;
        self.next_seq
    }

    /// Applies a response unless a newer one already landed. Returns whether
    /// the value was kept.
    pub fn apply(&mut self, seq: u64, value: T) -> bool {
        if seq <= self.last_applied {
            return false;
        }

        self.last_applied = seq;
        self.latest = Some(value);
        true
    }

    pub fn latest(&self) -> Option<&T> {
        self.latest.as_ref()
    }
}
