//! Index document extraction.
//!
//! The index page lists every element in category tables: the first column
//! carries the visible tag identifier (as a link or inline code span), the
//! second a short description. The index defines the universe of work for
//! the run, so any failure here is fatal.

use std::sync::LazyLock;

use scraper::Selector;
use url::Url;

use crate::config::{resolve_href, validate_index_url};
use crate::dom::{attr_of, element_children, parse_document, text_of};
use crate::error::{HarvestError, Result};
use crate::http::Fetch;
use crate::types::TagDescriptor;

/// Every row body across all category tables.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static TABLE_BODIES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("table > tbody").expect("valid selector"));

/// The identifier inside a row's first cell: a link when the element has a
/// page of its own, a bare code span otherwise.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ROW_IDENTIFIER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a, code").expect("valid selector"));

/// Download and parse the index document.
///
/// # Arguments
/// * `fetcher` - Transport capability
/// * `index_url` - Absolute URL of the index document
///
/// # Returns
/// Descriptors for every index row, in document order.
pub async fn download_index<F>(fetcher: &F, index_url: &str) -> Result<Vec<TagDescriptor>>
where
    F: Fetch + ?Sized,
{
    let base = validate_index_url(index_url)?;
    let html = fetcher
        .fetch(index_url)
        .await
        .map_err(|e| HarvestError::IndexDownload {
            url: index_url.to_string(),
            source: Box::new(e),
        })?;
    parse_index_page(&html, &base)
}

/// Extract descriptors from a parsed index document.
///
/// Walks every row of every `table > tbody` in document order. A row whose
/// first cell carries no identifier at all is a [`HarvestError::MalformedIndexRow`];
/// a row whose identifier has no `href` yields a descriptor without a URL.
pub fn parse_index_page(html: &str, base: &Url) -> Result<Vec<TagDescriptor>> {
    let doc = parse_document(html);
    let mut descriptors = Vec::new();
    let mut row = 0usize;

    for tbody in doc.select(&TABLE_BODIES) {
        for tr in element_children(tbody) {
            row += 1;

            let identifier = element_children(tr)
                .next()
                .and_then(|cell| cell.select(&ROW_IDENTIFIER).next())
                .ok_or(HarvestError::MalformedIndexRow { row })?;

            let url = match attr_of(identifier, "href") {
                Some(href) => Some(resolve_href(base, href)?),
                None => None,
            };

            let description = element_children(tr).nth(1).map(text_of).unwrap_or_default();

            descriptors.push(TagDescriptor {
                tag: strip_delimiters(&text_of(identifier)),
                url,
                description,
            });
        }
    }

    tracing::debug!(count = descriptors.len(), "Parsed index document");
    Ok(descriptors)
}

/// Strip the enclosing angle brackets from a visible tag identifier.
///
/// Exactly one leading `<` and one trailing `>` are removed when present;
/// identifiers without the delimiters pass through unchanged.
fn strip_delimiters(text: &str) -> String {
    let stripped = text.strip_prefix('<').unwrap_or(text);
    let stripped = stripped.strip_suffix('>').unwrap_or(stripped);
    stripped.to_string()
}
