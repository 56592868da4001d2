//! Report Generator Module
//!
//! Renders the trending ranking into a downloadable PDF document.
//!
//! ## Overview
//! A report request names a timeframe and optionally carries a chart snapshot
//! exported by the dashboard (a base64 PNG, usually wrapped in a data URL).
//! The generator aggregates the current log, embeds the snapshot when it is
//! usable, and lays the ranking out as a paginated keyword/count table. A
//! broken snapshot downgrades the document to table-only instead of failing
//! the request.
//!
//! ## Responsibilities
//! - **Snapshot intake**: Data-URL stripping, base64 decoding, PNG checking.
//! - **Layout**: Title block, embedded chart, paginated table, empty-window
//!   notice.
//! - **Delivery**: `application/pdf` bytes with an attachment disposition.
//!
//! ## Submodules
//! - **`pdf`**: Document layout and rendering.
//! - **`snapshot`**: Chart snapshot decoding and validation.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The report request DTO.

pub mod handlers;
pub mod pdf;
pub mod snapshot;
pub mod types;

#[cfg(test)]
mod tests;
