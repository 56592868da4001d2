//! Search Log Recorder Module
//!
//! The persistent record of every search that passed through the resolver.
//!
//! ## Overview
//! Each resolved keyword produces exactly one log entry, hit or miss. Entries
//! carry the submitted keyword, a creation timestamp, whether the catalog had
//! a match, and a taxonomy category derived from the keyword. Entries that
//! missed the catalog can be flagged as reviewed by a curator; entries that
//! hit cannot.
//!
//! ## Responsibilities
//! - **Recording**: Appending immutable-by-default entries as searches happen.
//! - **Listing**: Returning entries most recent first for the dashboard.
//! - **Review**: Guarded, idempotent `reviewed` flagging of external misses.
//! - **Classification**: Assigning a deterministic taxonomy category at
//!   creation time.
//!
//! ## Submodules
//! - **`store`**: The concurrent `LogBook` store and its guarded mutations.
//! - **`classifier`**: The ordered keyword taxonomy.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The log entry and its identifier.

pub mod classifier;
pub mod handlers;
pub mod store;
pub mod types;
