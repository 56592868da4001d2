//! Trending Module Tests
//!
//! Validates the aggregation pipeline: window filtering, normalized grouping,
//! the three-level ranking order, and timeframe parsing.
//!
//! ## Test Scopes
//! - **Windows**: Month/year cutoffs and the unbounded all-time view.
//! - **Grouping**: Keyword identity under case and spacing differences.
//! - **Ranking**: Count, recency, then keyword as the final tie-break.
//! - **API**: Token parsing and the optional result limit.

#[cfg(test)]
mod tests {
    use crate::errors::PortalError;
    use crate::logbook::store::LogBook;
    use crate::logbook::types::{LogId, SearchLogEntry};
    use crate::trending::aggregate::aggregate;
    use crate::trending::handlers::{TrendingParams, handle_trending};
    use crate::trending::types::{Timeframe, TrendingRecord};
    use axum::extract::Query;
    use axum::{Extension, Json};
    use chrono::{DateTime, Duration, Utc};
    use std::sync::Arc;

    fn entry_at(keyword: &str, date: DateTime<Utc>) -> SearchLogEntry {
        SearchLogEntry {
            id: LogId::new(),
            keyword: keyword.to_string(),
            date_searched: date,
            found_in_catalog: false,
            category: None,
            reviewed: false,
        }
    }

    // ============================================================
    // AGGREGATION TESTS - counting and ranking
    // ============================================================

    #[test]
    fn test_aggregate_counts_and_ranks() {
        let now = Utc::now();
        let entries = vec![
            entry_at("quantum", now - Duration::hours(1)),
            entry_at("biology", now - Duration::hours(2)),
            entry_at("quantum", now - Duration::hours(3)),
            entry_at("quantum", now - Duration::hours(4)),
        ];

        let ranked = aggregate(&entries, Timeframe::AllTime, now);

        assert_eq!(
            ranked,
            vec![
                TrendingRecord {
                    keyword: "quantum".to_string(),
                    count: 3
                },
                TrendingRecord {
                    keyword: "biology".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_aggregate_groups_normalized_keywords() {
        let now = Utc::now();
        let entries = vec![
            entry_at("Quantum Computing", now - Duration::hours(1)),
            entry_at(" quantum   computing ", now - Duration::hours(2)),
            entry_at("quantum computing", now - Duration::hours(3)),
        ];

        let ranked = aggregate(&entries, Timeframe::AllTime, now);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].keyword, "quantum computing");
        assert_eq!(ranked[0].count, 3);
    }

    #[test]
    fn test_aggregate_tie_breaks_by_recency() {
        let now = Utc::now();
        let entries = vec![
            entry_at("older", now - Duration::days(2)),
            entry_at("newer", now - Duration::days(1)),
        ];

        let ranked = aggregate(&entries, Timeframe::AllTime, now);

        assert_eq!(ranked[0].keyword, "newer");
        assert_eq!(ranked[1].keyword, "older");
    }

    #[test]
    fn test_aggregate_recency_uses_latest_search_in_group() {
        let now = Utc::now();
        let entries = vec![
            entry_at("alpha", now - Duration::days(20)),
            entry_at("alpha", now - Duration::hours(1)),
            entry_at("beta", now - Duration::days(1)),
            entry_at("beta", now - Duration::days(1)),
        ];

        let ranked = aggregate(&entries, Timeframe::AllTime, now);

        // Counts tie at 2; alpha's latest search is fresher
        assert_eq!(ranked[0].keyword, "alpha");
        assert_eq!(ranked[1].keyword, "beta");
    }

    #[test]
    fn test_aggregate_tie_breaks_by_keyword() {
        let now = Utc::now();
        let moment = now - Duration::hours(1);
        let entries = vec![entry_at("beta", moment), entry_at("alpha", moment)];

        let ranked = aggregate(&entries, Timeframe::AllTime, now);

        assert_eq!(ranked[0].keyword, "alpha");
        assert_eq!(ranked[1].keyword, "beta");
    }

    // ============================================================
    // AGGREGATION TESTS - windows
    // ============================================================

    #[test]
    fn test_aggregate_month_window_excludes_old_entries() {
        let now = Utc::now();
        let entries = vec![
            entry_at("recent", now - Duration::days(10)),
            entry_at("stale", now - Duration::days(40)),
        ];

        let ranked = aggregate(&entries, Timeframe::Month, now);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].keyword, "recent");
    }

    #[test]
    fn test_aggregate_year_window() {
        let now = Utc::now();
        let entries = vec![
            entry_at("this year", now - Duration::days(200)),
            entry_at("last decade", now - Duration::days(400)),
        ];

        let ranked = aggregate(&entries, Timeframe::Year, now);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].keyword, "this year");
    }

    #[test]
    fn test_aggregate_alltime_includes_everything() {
        let now = Utc::now();
        let entries = vec![
            entry_at("ancient", now - Duration::days(400)),
            entry_at("fresh", now - Duration::hours(1)),
        ];

        let ranked = aggregate(&entries, Timeframe::AllTime, now);

        assert_eq!(ranked.len(), 2);
    }

    #[test]
    fn test_aggregate_includes_entry_exactly_on_cutoff() {
        let now = Utc::now();
        let entries = vec![entry_at("boundary", now - Duration::days(30))];

        let ranked = aggregate(&entries, Timeframe::Month, now);

        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn test_aggregate_year_vs_alltime_scenario() {
        let now = Utc::now();
        let entries = vec![
            entry_at("quantum", now - Duration::days(2)),
            entry_at("quantum", now - Duration::days(5)),
            entry_at("quantum", now - Duration::days(10)),
            entry_at("biology", now - Duration::days(400)),
        ];

        let year = aggregate(&entries, Timeframe::Year, now);
        assert_eq!(
            year,
            vec![TrendingRecord {
                keyword: "quantum".to_string(),
                count: 3
            }]
        );

        let alltime = aggregate(&entries, Timeframe::AllTime, now);
        assert_eq!(alltime.len(), 2);
        assert_eq!(alltime[0].keyword, "quantum");
        assert_eq!(alltime[0].count, 3);
        assert_eq!(alltime[1].keyword, "biology");
        assert_eq!(alltime[1].count, 1);
    }

    #[test]
    fn test_aggregate_empty_window_is_empty_vec() {
        let now = Utc::now();
        let entries = vec![entry_at("stale", now - Duration::days(40))];

        assert!(aggregate(&entries, Timeframe::Month, now).is_empty());
        assert!(aggregate(&[], Timeframe::AllTime, now).is_empty());
    }

    // ============================================================
    // TIMEFRAME PARSING TESTS
    // ============================================================

    #[test]
    fn test_timeframe_parse_tokens() {
        assert_eq!(Timeframe::parse("alltime").unwrap(), Timeframe::AllTime);
        assert_eq!(Timeframe::parse("month").unwrap(), Timeframe::Month);
        assert_eq!(Timeframe::parse("year").unwrap(), Timeframe::Year);
    }

    #[test]
    fn test_timeframe_parse_is_case_insensitive() {
        assert_eq!(Timeframe::parse("allTime").unwrap(), Timeframe::AllTime);
        assert_eq!(Timeframe::parse("MONTH").unwrap(), Timeframe::Month);
        assert_eq!(Timeframe::parse(" Year ").unwrap(), Timeframe::Year);
    }

    #[test]
    fn test_timeframe_empty_token_defaults_to_alltime() {
        assert_eq!(Timeframe::parse("").unwrap(), Timeframe::AllTime);
    }

    #[test]
    fn test_timeframe_rejects_unknown_token() {
        let err = Timeframe::parse("fortnight").unwrap_err();
        assert!(matches!(err, PortalError::Validation(_)));
    }

    // ============================================================
    // HANDLER TESTS
    // ============================================================

    #[tokio::test]
    async fn test_trending_handler_defaults_to_alltime() {
        let logbook = Arc::new(LogBook::new());
        logbook.record("quantum", false, None);
        logbook.record("quantum", false, None);

        let Json(records) = handle_trending(
            Query(TrendingParams {
                timeframe: None,
                limit: None,
            }),
            Extension(logbook),
        )
        .await
        .expect("trending failed");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].count, 2);
    }

    #[tokio::test]
    async fn test_trending_handler_applies_limit() {
        let logbook = Arc::new(LogBook::new());
        logbook.record("alpha", false, None);
        logbook.record("alpha", false, None);
        logbook.record("beta", false, None);

        let Json(records) = handle_trending(
            Query(TrendingParams {
                timeframe: Some("alltime".to_string()),
                limit: Some(1),
            }),
            Extension(logbook),
        )
        .await
        .expect("trending failed");

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].keyword, "alpha");
    }

    #[tokio::test]
    async fn test_trending_handler_rejects_bad_timeframe() {
        let logbook = Arc::new(LogBook::new());

        let result = handle_trending(
            Query(TrendingParams {
                timeframe: Some("fortnight".to_string()),
                limit: None,
            }),
            Extension(logbook),
        )
        .await;

        assert!(matches!(result, Err(PortalError::Validation(_))));
    }
}
