//! TypeScript-style attribute interface declarations.
//!
//! One interface per record: the tag name upper-cased on its first
//! character plus a fixed suffix, one optional string member per attribute,
//! a doc comment carrying the element description. This renderer only ever
//! sees successful records.

use crate::types::TagRecord;

/// Suffix appended to every generated interface name.
const INTERFACE_SUFFIX: &str = "TagAttributes";

/// Render one interface declaration.
///
/// ```
/// use tagatlas::render::render_declaration;
/// use tagatlas::types::TagRecord;
///
/// let record = TagRecord {
///     tag: "div".to_string(),
///     description: "Generic container".to_string(),
///     attributes: Vec::new(),
/// };
/// assert_eq!(
///     render_declaration(&record),
///     "/** Generic container */\ninterface DivTagAttributes {\n}"
/// );
/// ```
#[must_use]
pub fn render_declaration(record: &TagRecord) -> String {
    let mut out = String::new();
    out.push_str(&format!("/** {} */\n", record.description));
    out.push_str(&format!("interface {} {{\n", interface_name(&record.tag)));

    for attribute in &record.attributes {
        if attribute.deprecated {
            out.push_str("  /** @deprecated */\n");
        }
        out.push_str(&format!("  {}?: string;\n", member_name(&attribute.name)));
    }

    out.push('}');
    out
}

/// Render declarations for a sequence of records, blank-line separated,
/// in record order.
#[must_use]
pub fn render_declarations<'a>(records: impl IntoIterator<Item = &'a TagRecord>) -> String {
    let blocks: Vec<String> = records.into_iter().map(render_declaration).collect();
    if blocks.is_empty() {
        String::new()
    } else {
        let mut out = blocks.join("\n\n");
        out.push('\n');
        out
    }
}

/// Interface name for a tag: first character upper-cased plus the suffix.
fn interface_name(tag: &str) -> String {
    let mut chars = tag.chars();
    match chars.next() {
        Some(first) => format!("{}{}{INTERFACE_SUFFIX}", first.to_uppercase(), chars.as_str()),
        None => INTERFACE_SUFFIX.to_string(),
    }
}

/// Member names containing a hyphen are not valid identifiers and need quoting.
fn member_name(name: &str) -> String {
    if name.contains('-') {
        format!("\"{name}\"")
    } else {
        name.to_string()
    }
}
