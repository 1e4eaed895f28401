//! Configuration constants and URL handling for the harvester.

use url::Url;

use crate::error::{HarvestError, Result};

/// Default index document: the MDN HTML element reference.
pub const MDN_INDEX_URL: &str = "https://developer.mozilla.org/en-US/docs/Web/HTML/Element";

/// HTTP timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 30;

/// Maximum number of retry attempts for transient failures.
pub const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (milliseconds).
pub const RETRY_BASE_DELAY_MS: u64 = 500;

/// Validate and parse an index URL.
///
/// Only absolute `http`/`https` URLs are accepted: relative links inside the
/// index are resolved against this URL's origin, so it must carry one.
///
/// # Examples
/// ```
/// use tagatlas::config::validate_index_url;
///
/// assert!(validate_index_url("https://developer.mozilla.org/en-US/docs/Web/HTML/Element").is_ok());
/// assert!(validate_index_url("not-a-url").is_err());
/// assert!(validate_index_url("ftp://example.com/index").is_err());
/// ```
pub fn validate_index_url(url: &str) -> Result<Url> {
    let parsed =
        Url::parse(url).map_err(|_| HarvestError::InvalidIndexUrl(url.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        _ => Err(HarvestError::InvalidIndexUrl(url.to_string())),
    }
}

/// Resolve an index-row `href` against the origin of the index document.
///
/// Index links are typically root-relative (`/en-US/docs/...`); absolute
/// URLs pass through unchanged.
///
/// # Arguments
/// * `base` - The index document URL (validated)
/// * `href` - The raw `href` attribute value from the index row
pub fn resolve_href(base: &Url, href: &str) -> Result<String> {
    let origin = Url::parse(&base.origin().ascii_serialization())?;
    Ok(origin.join(href)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_index_url_valid() {
        assert!(validate_index_url(MDN_INDEX_URL).is_ok());
        assert!(validate_index_url("http://localhost:8080/index").is_ok());
    }

    #[test]
    fn test_validate_index_url_invalid() {
        assert!(validate_index_url("").is_err());
        assert!(validate_index_url("Element").is_err());
        assert!(validate_index_url("file:///etc/passwd").is_err());
        assert!(validate_index_url("ftp://example.com/").is_err());
    }

    #[test]
    fn test_resolve_href_root_relative() {
        let base = validate_index_url(MDN_INDEX_URL).unwrap();
        assert_eq!(
            resolve_href(&base, "/en-US/docs/Web/HTML/Element/div").unwrap(),
            "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/div"
        );
    }

    #[test]
    fn test_resolve_href_absolute_passthrough() {
        let base = validate_index_url(MDN_INDEX_URL).unwrap();
        assert_eq!(
            resolve_href(&base, "https://example.com/div").unwrap(),
            "https://example.com/div"
        );
    }

    #[test]
    fn test_resolve_href_against_origin_not_path() {
        // Relative hrefs resolve against the origin, not the index path.
        let base = validate_index_url(MDN_INDEX_URL).unwrap();
        assert_eq!(
            resolve_href(&base, "div").unwrap(),
            "https://developer.mozilla.org/div"
        );
    }
}
