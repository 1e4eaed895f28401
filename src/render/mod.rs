//! Output rendering for harvested records.
//!
//! Renderers are pure: they map records to text and perform no I/O. Writing
//! the rendered channels to their sinks is the CLI's job.

pub mod dts;
pub mod json;

pub use dts::{render_declaration, render_declarations};
pub use json::{render_aggregate, render_failures, render_successes};
