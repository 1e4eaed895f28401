//! Core data types for the harvester.
//!
//! All entities are immutable and scoped to a single pipeline run: created
//! during extraction, consumed by the renderers, then discarded.

use serde::{Deserialize, Serialize};

use crate::error::HarvestError;

/// Lightweight reference to one element, extracted from an index row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDescriptor {
    /// Tag identifier with the enclosing angle brackets stripped (e.g. "div").
    pub tag: String,

    /// Resolved URL of the detail page. Absent when the index row carries
    /// no link; detail extraction is skipped for such descriptors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Free-text description from the second index column.
    pub description: String,
}

impl TagDescriptor {
    /// Create a descriptor without a detail link.
    #[must_use]
    pub fn unlinked(tag: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            url: None,
            description: description.into(),
        }
    }

    /// Create a descriptor with a detail link.
    #[must_use]
    pub fn linked(
        tag: impl Into<String>,
        url: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            tag: tag.into(),
            url: Some(url.into()),
            description: description.into(),
        }
    }
}

/// One attribute definition from an element's detail page.
///
/// The status flags are not mutually exclusive; an attribute may carry any
/// combination of badges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    /// Attribute name, taken verbatim from the code-styled term.
    pub name: String,

    /// Marked deprecated in the source document.
    pub deprecated: bool,

    /// Marked experimental in the source document.
    pub experimental: bool,

    /// Marked non-standard in the source document.
    pub non_standard: bool,
}

impl Attribute {
    /// Create an attribute with all status flags cleared.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deprecated: false,
            experimental: false,
            non_standard: false,
        }
    }
}

/// Fully extracted record for one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Tag identifier (e.g. "div").
    pub tag: String,

    /// Description carried over from the index row.
    pub description: String,

    /// Element-specific attributes in document order. Empty when the
    /// descriptor has no detail link or the page declares none.
    pub attributes: Vec<Attribute>,
}

impl TagRecord {
    /// Create a record with no attributes from a descriptor.
    #[must_use]
    pub fn from_descriptor(descriptor: &TagDescriptor) -> Self {
        Self {
            tag: descriptor.tag.clone(),
            description: descriptor.description.clone(),
            attributes: Vec::new(),
        }
    }

    /// Attach extracted attributes.
    #[must_use]
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }
}

/// A scoped extraction failure: which descriptor failed, and why.
#[derive(Debug)]
pub struct TagFailure {
    /// Tag identifier of the failed descriptor.
    pub tag: String,

    /// The underlying error.
    pub error: HarvestError,
}

impl TagFailure {
    /// Project this failure into its serializable form.
    #[must_use]
    pub fn report(&self) -> FailureReport {
        FailureReport {
            tag: self.tag.clone(),
            kind: self.error.kind().to_string(),
            message: self.error.to_string(),
        }
    }
}

/// Serializable failure entry for the failure channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureReport {
    /// Tag identifier of the failed descriptor.
    pub tag: String,

    /// Stable error discriminant (see [`HarvestError::kind`]).
    pub kind: String,

    /// Human-readable error message.
    pub message: String,
}

/// Outcome of extracting one descriptor.
///
/// The orchestrator produces one outcome per descriptor, in descriptor
/// order, regardless of individual failures.
pub type TagOutcome = std::result::Result<TagRecord, TagFailure>;
