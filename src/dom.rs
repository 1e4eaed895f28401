//! Document-model adapter: thin query helpers over the parsed HTML tree.
//!
//! Extraction logic goes through these helpers (plus CSS selectors) rather
//! than the parser API directly, so it stays tree-shape-agnostic and can be
//! exercised against synthetic documents in tests.

use scraper::{ElementRef, Html};

/// Parse an HTML document into a traversable tree.
///
/// The parser is lenient: malformed markup yields a best-effort tree, never
/// an error. Structural problems therefore surface at extraction time, when
/// an expected substructure is missing.
#[must_use]
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// Get the text content of an element, whitespace-trimmed.
///
/// Concatenates all descendant text nodes in document order.
///
/// # Examples
/// ```
/// use tagatlas::dom::{parse_document, text_of};
/// use scraper::Selector;
///
/// let doc = parse_document("<p>Hello <b>world</b>!</p>");
/// let p = Selector::parse("p").unwrap();
/// let el = doc.select(&p).next().unwrap();
/// assert_eq!(text_of(el), "Hello world!");
/// ```
#[must_use]
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Get an attribute value from an element.
///
/// # Examples
/// ```
/// use tagatlas::dom::{parse_document, attr_of};
/// use scraper::Selector;
///
/// let doc = parse_document(r#"<a href="/div">link</a>"#);
/// let a = Selector::parse("a").unwrap();
/// let el = doc.select(&a).next().unwrap();
/// assert_eq!(attr_of(el, "href"), Some("/div"));
/// assert_eq!(attr_of(el, "missing"), None);
/// ```
#[must_use]
pub fn attr_of<'a>(el: ElementRef<'a>, name: &str) -> Option<&'a str> {
    el.value().attr(name)
}

/// Iterate the element children of an element, in document order.
///
/// Text nodes and comments are skipped.
pub fn element_children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}
