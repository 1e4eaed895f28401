//! Error types for the harvester.
//!
//! The taxonomy follows the failure model of the pipeline: index-level
//! errors are fatal for the run, detail-level errors are scoped to a single
//! tag and surfaced through the failure channel.

use thiserror::Error;

/// Main error type for the tagatlas library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Invalid index URL.
    #[error("Invalid index URL: '{0}'. Expected an absolute http(s) URL")]
    InvalidIndexUrl(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// All retry attempts for a request were exhausted.
    #[error("Retries exhausted after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// Failed to download the index document.
    #[error("Failed to download index document from {url}: {source}")]
    IndexDownload {
        url: String,
        #[source]
        source: Box<HarvestError>,
    },

    /// Failed to download a tag's detail document.
    #[error("Failed to download page for <{tag}>: {source}")]
    DetailDownload {
        tag: String,
        #[source]
        source: Box<HarvestError>,
    },

    /// An index row whose first cell carries no identifier.
    #[error("Malformed index row {row}: first cell has no link or code identifier")]
    MalformedIndexRow { row: usize },

    /// An attribute definition entry without a code-styled name.
    #[error("Attribute entry for <{tag}> has no code-styled name")]
    MissingAttributeName { tag: String },

    /// URL parsing failed.
    #[error("URL parsing failed: {0}")]
    UrlParse(#[from] url::ParseError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl HarvestError {
    /// Stable machine-readable discriminant, used on the failure channel.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidIndexUrl(_) => "invalid_index_url",
            Self::Http(_) => "http",
            Self::RetriesExhausted { .. } => "retries_exhausted",
            Self::IndexDownload { .. } => "index_download",
            Self::DetailDownload { .. } => "detail_download",
            Self::MalformedIndexRow { .. } => "malformed_index_row",
            Self::MissingAttributeName { .. } => "missing_attribute_name",
            Self::UrlParse(_) => "url_parse",
            Self::Io(_) => "io",
            Self::Json(_) => "json",
        }
    }
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
