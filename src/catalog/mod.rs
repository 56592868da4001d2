//! Catalog Search Module
//!
//! The paper catalog and the keyword resolver sitting at the front of the
//! search pipeline.
//!
//! ## Overview
//! A submitted keyword is normalized and matched as a substring against every
//! stored paper's title, author, keywords, abstract and year. When nothing
//! matches, the resolver falls back to a single fuzzy-matched suggestion drawn
//! from the catalog's own field values. Every resolution, hit or miss, records
//! exactly one entry in the search logbook.
//!
//! ## Responsibilities
//! - **Normalization**: The shared canonical keyword form used for matching,
//!   grouping and classification.
//! - **Resolution**: Substring matching plus the windowed Levenshtein
//!   suggestion fallback.
//! - **Population**: The in-memory paper store, its JSON seed loader, and the
//!   registration endpoints.
//! - **API**: Exposing search and catalog endpoints via the Axum web server.
//!
//! ## Submodules
//! - **`resolver`**: Core matching and suggestion logic.
//! - **`normalize`**: Keyword canonicalization shared across the pipeline.
//! - **`store`**: The concurrent `PaperCatalog` store and seed loading.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: Paper records and search result DTOs.

pub mod handlers;
pub mod normalize;
pub mod resolver;
pub mod store;
pub mod types;
