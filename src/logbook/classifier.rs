//! Keyword Taxonomy Classifier
//!
//! Assigns a research-field category to a search keyword at recording time.
//! The taxonomy is an ordered table of categories, each with a list of
//! field-specific terms; the first category with a term match wins, so the
//! same keyword always lands in the same category.

use crate::catalog::normalize::normalize_keyword;
use regex::Regex;

/// Category table in priority order. Terms are matched on word boundaries
/// against the normalized keyword, so "math" does not fire inside
/// "mathematical".
const TAXONOMY: &[(&str, &[&str])] = &[
    (
        "computer science",
        &[
            "algorithm",
            "computing",
            "computer",
            "software",
            "programming",
            "machine learning",
            "artificial intelligence",
            "neural network",
            "database",
            "cryptography",
        ],
    ),
    (
        "physics",
        &[
            "physics",
            "quantum",
            "relativity",
            "particle",
            "cosmology",
            "thermodynamics",
            "gravity",
            "photon",
        ],
    ),
    (
        "biology",
        &[
            "biology",
            "gene",
            "genome",
            "genetics",
            "evolution",
            "protein",
            "ecology",
            "microbiome",
        ],
    ),
    (
        "medicine",
        &[
            "medicine",
            "medical",
            "cancer",
            "vaccine",
            "clinical",
            "disease",
            "epidemiology",
            "immunology",
        ],
    ),
    (
        "mathematics",
        &[
            "mathematics",
            "math",
            "algebra",
            "geometry",
            "calculus",
            "topology",
            "statistics",
            "probability",
        ],
    ),
    (
        "chemistry",
        &[
            "chemistry",
            "chemical",
            "molecule",
            "polymer",
            "catalyst",
            "electrochemistry",
        ],
    ),
];

/// Returns the first matching category for the keyword, or `None` when no
/// taxonomy term applies. Downstream views render `None` as "uncategorized".
pub fn classify_keyword(keyword: &str) -> Option<String> {
    let normalized = normalize_keyword(keyword);
    if normalized.is_empty() {
        return None;
    }

    for (category, terms) in TAXONOMY {
        for term in *terms {
            let pattern = format!(r"\b{}\b", regex::escape(term));
            let re = Regex::new(&pattern).unwrap();
            if re.is_match(&normalized) {
                return Some((*category).to_string());
            }
        }
    }

    None
}
