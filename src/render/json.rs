//! Aggregate JSON rendering.
//!
//! Successes and failures are rendered on separate channels, each a
//! sequence of pretty-printed JSON blocks in result order.

use crate::error::Result;
use crate::types::TagOutcome;

/// Render the success channel: one pretty-printed record per block.
pub fn render_successes(outcomes: &[TagOutcome]) -> Result<String> {
    let mut out = String::new();
    for record in outcomes.iter().filter_map(|outcome| outcome.as_ref().ok()) {
        out.push_str(&serde_json::to_string_pretty(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Render the failure channel: one pretty-printed failure report per block.
pub fn render_failures(outcomes: &[TagOutcome]) -> Result<String> {
    let mut out = String::new();
    for failure in outcomes.iter().filter_map(|outcome| outcome.as_ref().err()) {
        out.push_str(&serde_json::to_string_pretty(&failure.report())?);
        out.push('\n');
    }
    Ok(out)
}

/// Render both channels, preserving result order within each.
pub fn render_aggregate(outcomes: &[TagOutcome]) -> Result<(String, String)> {
    Ok((render_successes(outcomes)?, render_failures(outcomes)?))
}
