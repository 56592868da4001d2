//! Catalog Search Resolver
//!
//! Resolves a submitted keyword against the paper catalog. Matching is a
//! normalized substring test over every searchable field of every paper; a
//! miss falls back to at most one fuzzy-matched suggestion. Every resolution
//! records exactly one logbook entry, hit or miss, so the trending pipeline
//! sees the complete search history.

use super::normalize::normalize_keyword;
use super::store::PaperCatalog;
use super::types::{PaperRecord, PaperSummary, SearchOutcome};
use crate::logbook::classifier::classify_keyword;
use crate::logbook::store::LogBook;
use std::collections::BTreeSet;

/// Minimum similarity before a near-miss candidate is offered back to the
/// user. Anything weaker is suppressed rather than risk a nonsense prompt.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Resolves `keyword` against the catalog and records the search.
///
/// The caller guarantees a non-blank keyword; the HTTP handler rejects blank
/// input before resolution. Results are ordered by title, then id, so the
/// same catalog state always produces the same response.
pub fn resolve(keyword: &str, catalog: &PaperCatalog, logbook: &LogBook) -> SearchOutcome {
    let needle = normalize_keyword(keyword);

    let mut matches: Vec<PaperRecord> = catalog
        .papers
        .iter()
        .filter(|entry| paper_matches(entry.value(), &needle))
        .map(|entry| entry.value().clone())
        .collect();
    matches.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.0.cmp(&b.id.0)));

    let results: Vec<PaperSummary> = matches.into_iter().map(summarize).collect();

    let suggestion = if results.is_empty() {
        best_suggestion(&needle, catalog)
    } else {
        None
    };

    logbook.record(keyword, !results.is_empty(), classify_keyword(keyword));

    SearchOutcome {
        results,
        suggestion,
    }
}

/// A paper matches when the normalized needle appears in any searchable
/// field: title, author, any keyword, the abstract, or the year digits.
fn paper_matches(paper: &PaperRecord, needle: &str) -> bool {
    if normalize_keyword(&paper.title).contains(needle)
        || normalize_keyword(&paper.author).contains(needle)
        || normalize_keyword(&paper.abstract_text).contains(needle)
    {
        return true;
    }

    if paper
        .keywords
        .iter()
        .any(|keyword| normalize_keyword(keyword).contains(needle))
    {
        return true;
    }

    if let Some(year) = paper.year
        && year.to_string().contains(needle)
    {
        return true;
    }

    false
}

fn summarize(paper: PaperRecord) -> PaperSummary {
    let abstract_text = if paper.abstract_text.trim().is_empty() {
        "Abstract not available".to_string()
    } else {
        paper.abstract_text
    };

    PaperSummary {
        title: paper.title,
        author: paper.author,
        abstract_text,
        file_path: paper.file_path,
        source: "catalog".to_string(),
    }
}

/// Picks the closest catalog field value to the needle, or `None` when
/// nothing clears the similarity threshold.
///
/// The candidate pool is every raw title, author and keyword value. A
/// `BTreeSet` deduplicates and orders the pool, and only a strictly greater
/// score replaces the current best, so ties always resolve to the
/// lexicographically smallest candidate.
fn best_suggestion(needle: &str, catalog: &PaperCatalog) -> Option<String> {
    let mut candidates: BTreeSet<String> = BTreeSet::new();
    for entry in catalog.papers.iter() {
        let paper = entry.value();
        candidates.insert(paper.title.clone());
        candidates.insert(paper.author.clone());
        for keyword in &paper.keywords {
            candidates.insert(keyword.clone());
        }
    }

    let mut best: Option<(f64, String)> = None;
    for candidate in candidates {
        let score = window_similarity(needle, &normalize_keyword(&candidate));
        if score < SUGGESTION_THRESHOLD {
            continue;
        }

        let replace = match &best {
            Some((best_score, _)) => score > *best_score,
            None => true,
        };
        if replace {
            best = Some((score, candidate));
        }
    }

    best.map(|(_, candidate)| candidate)
}

/// Similarity between the needle and a candidate, taking the best of the
/// whole-string comparison and every window of the candidate with the same
/// word count as the needle. A one-word typo like "qwantum" then scores
/// against the "quantum" inside "quantum computing" instead of the full,
/// much longer phrase.
fn window_similarity(needle: &str, candidate: &str) -> f64 {
    let mut best = strsim::normalized_levenshtein(needle, candidate);

    let needle_words = needle.split_whitespace().count();
    let candidate_words: Vec<&str> = candidate.split_whitespace().collect();

    if needle_words > 0 && candidate_words.len() > needle_words {
        for window in candidate_words.windows(needle_words) {
            let score = strsim::normalized_levenshtein(needle, &window.join(" "));
            if score > best {
                best = score;
            }
        }
    }

    best
}
