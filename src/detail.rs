//! Per-tag detail document extraction.
//!
//! A detail page declares the element's own attributes in a labeled section;
//! attributes shared by all elements live in a separately labeled section
//! that is explicitly excluded. Each attribute definition is a term node
//! whose code-styled child carries the name and whose badges carry the
//! standardization status.

use std::sync::LazyLock;

use scraper::Selector;

use crate::dom::{parse_document, text_of};
use crate::error::{HarvestError, Result};
use crate::http::Fetch;
use crate::types::{Attribute, TagDescriptor, TagRecord};

/// Attribute definition terms inside the element-scoped attribute section.
/// The global attribute section is excluded by its label.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static ATTRIBUTE_TERMS: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(
        "section[aria-labelledby*=attributes]:not([aria-labelledby=global_attributes]) > div > dl > dt",
    )
    .expect("valid selector")
});

/// The code-styled child of a term node carrying the attribute name.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static NAME_CODE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("code").expect("valid selector"));

/// Status badge markers embedded in a term node.
#[allow(clippy::expect_used)] // Static selector that is guaranteed to be valid
static STATUS_BADGES: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("abbr > span").expect("valid selector"));

/// Download and parse the detail page for one descriptor.
///
/// A descriptor without a URL is purely informational: its record is
/// returned immediately with an empty attribute list and no fetch is
/// attempted.
pub async fn download_tag<F>(fetcher: &F, descriptor: &TagDescriptor) -> Result<TagRecord>
where
    F: Fetch + ?Sized,
{
    let Some(url) = descriptor.url.as_deref() else {
        return Ok(TagRecord::from_descriptor(descriptor));
    };

    let html = fetcher
        .fetch(url)
        .await
        .map_err(|e| HarvestError::DetailDownload {
            tag: descriptor.tag.clone(),
            source: Box::new(e),
        })?;
    parse_tag_page(descriptor, &html)
}

/// Extract a full record from a parsed detail document.
///
/// Attribute entries are emitted in document order. A page without an
/// element-scoped attribute section yields an empty attribute list; a term
/// node without a code-styled name is a [`HarvestError::MissingAttributeName`]
/// scoped to this descriptor.
pub fn parse_tag_page(descriptor: &TagDescriptor, html: &str) -> Result<TagRecord> {
    let doc = parse_document(html);
    let mut attributes = Vec::new();

    for term in doc.select(&ATTRIBUTE_TERMS) {
        let name = term
            .select(&NAME_CODE)
            .next()
            .map(text_of)
            .ok_or_else(|| HarvestError::MissingAttributeName {
                tag: descriptor.tag.clone(),
            })?;

        let mut attribute = Attribute::new(name);
        for badge in term.select(&STATUS_BADGES) {
            match text_of(badge).to_lowercase().as_str() {
                "deprecated" => attribute.deprecated = true,
                "experimental" => attribute.experimental = true,
                "non-standard" => attribute.non_standard = true,
                // Unrecognized badges are ignored for forward compatibility.
                _ => {}
            }
        }
        attributes.push(attribute);
    }

    Ok(TagRecord::from_descriptor(descriptor).with_attributes(attributes))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor() -> TagDescriptor {
        TagDescriptor::linked(
            "input",
            "https://developer.mozilla.org/en-US/docs/Web/HTML/Element/input",
            "Form input control",
        )
    }

    const SAMPLE_DETAIL: &str = r##"<!doctype html>
<html><body>
<section aria-labelledby="attributes">
  <h2 id="attributes">Attributes</h2>
  <div>
    <dl>
      <dt id="attr-accept"><a href="#accept"><code>accept</code></a></dt>
      <dd>Hint for expected file types.</dd>
      <dt id="attr-autocorrect">
        <code>autocorrect</code>
        <abbr class="icon icon-nonstandard" title="Non-standard.">
          <span class="visually-hidden">Non-standard</span>
        </abbr>
        <abbr title="A note."><span class="visually-hidden">Note</span></abbr>
      </dt>
      <dd>Automatic correction of editable text.</dd>
      <dt id="attr-data-foo">
        <code>data-foo</code>
        <abbr title="Deprecated."><span class="visually-hidden">Deprecated</span></abbr>
        <abbr title="Experimental."><span class="visually-hidden">Experimental</span></abbr>
      </dt>
      <dd>Made-up attribute.</dd>
    </dl>
  </div>
</section>
<section aria-labelledby="global_attributes">
  <h2 id="global_attributes">Global attributes</h2>
  <div>
    <dl>
      <dt><a href="/class"><code>class</code></a></dt>
      <dd>Shared by all elements.</dd>
    </dl>
  </div>
</section>
</body></html>"##;

    #[test]
    fn test_parse_detail_attribute_names_in_document_order() {
        let record = parse_tag_page(&descriptor(), SAMPLE_DETAIL).unwrap();

        let names: Vec<&str> = record.attributes.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["accept", "autocorrect", "data-foo"]);
    }

    #[test]
    fn test_parse_detail_status_flags() {
        let record = parse_tag_page(&descriptor(), SAMPLE_DETAIL).unwrap();

        let accept = &record.attributes[0];
        assert!(!accept.deprecated && !accept.experimental && !accept.non_standard);

        let autocorrect = &record.attributes[1];
        assert!(autocorrect.non_standard);
        assert!(!autocorrect.deprecated && !autocorrect.experimental);

        // Markers combine; the unknown "Note" badge changed nothing.
        let data_foo = &record.attributes[2];
        assert!(data_foo.deprecated && data_foo.experimental);
        assert!(!data_foo.non_standard);
    }

    #[test]
    fn test_parse_detail_excludes_global_attribute_section() {
        let record = parse_tag_page(&descriptor(), SAMPLE_DETAIL).unwrap();
        assert!(record.attributes.iter().all(|a| a.name != "class"));
    }

    #[test]
    fn test_parse_detail_without_attribute_section() {
        let html = r#"<html><body>
            <section aria-labelledby="global_attributes">
              <div><dl><dt><code>class</code></dt></dl></div>
            </section>
        </body></html>"#;

        let record = parse_tag_page(&descriptor(), html).unwrap();
        assert!(record.attributes.is_empty());
        assert_eq!(record.tag, "input");
        assert_eq!(record.description, "Form input control");
    }

    #[test]
    fn test_parse_detail_missing_name_is_descriptor_scoped_failure() {
        let html = r#"<html><body>
            <section aria-labelledby="attributes">
              <div><dl><dt>no code child here</dt></dl></div>
            </section>
        </body></html>"#;

        let err = parse_tag_page(&descriptor(), html).unwrap_err();
        match err {
            HarvestError::MissingAttributeName { tag } => assert_eq!(tag, "input"),
            other => panic!("expected MissingAttributeName, got {other}"),
        }
    }

    #[test]
    fn test_parse_detail_badge_text_is_case_insensitive() {
        let html = r#"<html><body>
            <section aria-labelledby="attributes">
              <div><dl>
                <dt><code>align</code>
                  <abbr><span>DEPRECATED</span></abbr>
                </dt>
              </dl></div>
            </section>
        </body></html>"#;

        let record = parse_tag_page(&descriptor(), html).unwrap();
        assert!(record.attributes[0].deprecated);
    }

    #[tokio::test]
    async fn test_download_tag_without_url_skips_fetch() {
        let fetcher = crate::testing::MockFetcher::new();
        let descriptor = TagDescriptor::unlinked("portal", "Embedded preview");

        let record = download_tag(&fetcher, &descriptor).await.unwrap();

        assert!(record.attributes.is_empty());
        assert_eq!(fetcher.total_calls(), 0);
    }
}
