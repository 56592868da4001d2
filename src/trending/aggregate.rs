//! Trending Aggregation
//!
//! Pure computation from a log snapshot to a ranked keyword list. Taking the
//! snapshot and the clock as parameters keeps the ranking reproducible: the
//! same entries and the same `now` always produce the same output.

use super::types::{Timeframe, TrendingRecord};
use crate::catalog::normalize::normalize_keyword;
use crate::logbook::types::SearchLogEntry;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Groups the entries inside the timeframe's trailing window by normalized
/// keyword and ranks them by count. Ties rank the group with the more recent
/// search first, then fall back to keyword order. Keywords with no searches
/// in the window simply do not appear.
pub fn aggregate(
    entries: &[SearchLogEntry],
    timeframe: Timeframe,
    now: DateTime<Utc>,
) -> Vec<TrendingRecord> {
    let cutoff = match timeframe {
        Timeframe::AllTime => None,
        Timeframe::Month => Some(now - Duration::days(30)),
        Timeframe::Year => Some(now - Duration::days(365)),
    };

    let mut groups: HashMap<String, (u64, DateTime<Utc>)> = HashMap::new();
    for entry in entries {
        if let Some(cutoff) = cutoff
            && entry.date_searched < cutoff
        {
            continue;
        }

        groups
            .entry(normalize_keyword(&entry.keyword))
            .and_modify(|(count, last)| {
                *count += 1;
                if entry.date_searched > *last {
                    *last = entry.date_searched;
                }
            })
            .or_insert((1, entry.date_searched));
    }

    let mut ranked: Vec<(String, u64, DateTime<Utc>)> = groups
        .into_iter()
        .map(|(keyword, (count, last))| (keyword, count, last))
        .collect();

    ranked.sort_by(|a, b| {
        b.1.cmp(&a.1)
            .then_with(|| b.2.cmp(&a.2))
            .then_with(|| a.0.cmp(&b.0))
    });

    ranked
        .into_iter()
        .map(|(keyword, count, _)| TrendingRecord { keyword, count })
        .collect()
}
