//! Research Paper Portal Library
//!
//! This library crate defines the core modules of the portal's search and
//! analytics pipeline. It serves as the foundation for the binary executable
//! (`main.rs`).
//!
//! ## Architecture Modules
//! The pipeline is composed of four loosely coupled subsystems plus a shared
//! error layer:
//!
//! - **`catalog`**: The paper catalog and the search resolver. Matches a
//!   submitted keyword against the stored papers and falls back to a
//!   fuzzy-matched suggestion when nothing matches.
//! - **`logbook`**: The search log recorder. Every resolved search lands here
//!   as a categorized, timestamped entry that can later be reviewed or
//!   deleted.
//! - **`trending`**: The trending aggregator. Groups the recorded searches by
//!   normalized keyword over a trailing time window and ranks them by count.
//! - **`report`**: The report generator. Renders the trending ranking, plus an
//!   optional client-supplied chart snapshot, into a downloadable PDF.
//! - **`errors`**: The shared `PortalError` type mapping failure kinds to
//!   HTTP statuses.

pub mod catalog;
pub mod errors;
pub mod logbook;
pub mod report;
pub mod trending;
