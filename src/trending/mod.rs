//! Trending Aggregator Module
//!
//! Turns the raw search log into a ranked list of trending keywords.
//!
//! ## Overview
//! Aggregation is a pure function over a snapshot of log entries: filter to a
//! trailing time window, group by the normalized keyword, count, and rank.
//! Nothing is cached or persisted; every call recomputes from the current
//! log so deletions disappear immediately.
//!
//! ## Responsibilities
//! - **Windowing**: Trailing month/year cutoffs or the unbounded all-time view.
//! - **Grouping**: Case- and spacing-insensitive keyword identity.
//! - **Ranking**: Count first, most recent activity second, keyword last.
//! - **API**: The trending endpoint with its optional result limit.
//!
//! ## Submodules
//! - **`aggregate`**: The pure aggregation function.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Timeframe parsing and the trending record DTO.

pub mod aggregate;
pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
