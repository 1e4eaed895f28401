//! tagatlas - Harvest HTML element and attribute metadata from the MDN reference.
//!
//! This crate downloads the HTML element index page, follows every
//! element's detail page concurrently, and extracts per-attribute
//! standardization metadata (deprecated / experimental / non-standard) into
//! typed records, rendered as aggregate JSON or TypeScript-style interface
//! declarations.
//!
//! # Example
//!
//! ```
//! use tagatlas::config;
//!
//! // Index URLs must be absolute http(s) URLs
//! assert!(config::validate_index_url("https://developer.mozilla.org/en-US/docs/Web/HTML/Element").is_ok());
//! assert!(config::validate_index_url("Element").is_err());
//! ```
//!
//! # Architecture
//!
//! The harvester is organized into several modules:
//!
//! - [`config`]: Configuration constants and URL handling
//! - [`types`]: Core data types (TagDescriptor, TagRecord, Attribute, etc.)
//! - [`error`]: Error types and Result alias
//! - [`http`]: Fetch capability (trait plus reqwest implementation)
//! - [`dom`]: Document-model query helpers
//! - [`index`]: Index document extraction
//! - [`detail`]: Per-tag detail extraction
//! - [`harvester`]: Pipeline orchestration
//! - [`render`]: JSON and declaration renderers
//! - [`testing`]: Fetch test doubles
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod detail;
pub mod dom;
pub mod error;
pub mod harvester;
pub mod http;
pub mod index;
pub mod render;
pub mod testing;
pub mod types;

// Re-export main functions
pub use harvester::harvest;

// Re-export commonly used items
pub use error::{HarvestError, Result};
pub use http::{Fetch, HttpFetcher};
pub use render::{render_aggregate, render_declarations};
pub use types::{Attribute, FailureReport, TagDescriptor, TagFailure, TagOutcome, TagRecord};
