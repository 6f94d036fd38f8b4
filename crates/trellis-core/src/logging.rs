//! Logging and debugging facilities for Trellis.
//!
//! Trellis uses the `tracing` crate for instrumentation. To see logs, install
//! a subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("trellis=debug,trellis_core=trace")
//!         .init();
//! }
//! ```
//!
//! The [`targets`] constants name every subsystem, so a directive such as
//! `trellis::widget::scale=trace` shows per-step drag tracking only.

use crate::object::{global_registry, ObjectId, ObjectResult};

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core framework target.
    pub const CORE: &str = "trellis_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "trellis_core::signal";
    /// Object model target.
    pub const OBJECT: &str = "trellis_core::object";
    /// Adjustment (bounded value) target.
    pub const ADJUSTMENT: &str = "trellis_core::adjustment";
    /// Performance spans.
    pub const PERF: &str = "trellis::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// This is useful for tracking the duration of operations such as building a
/// drawable or loading a theme.
#[derive(Debug)]
pub struct PerfSpan {
    _span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "trellis::perf", "perf", operation = name);
        Self {
            _span: span.entered(),
        }
    }
}

/// Format a one-line description of an object: `name [id] (Type)`.
///
/// Unnamed objects are shown as `(unnamed)`, and the type is shortened to its
/// last path segment.
pub fn describe_object(id: ObjectId) -> ObjectResult<String> {
    let registry = global_registry();
    let name = registry.name(id)?;
    let type_name = registry.type_name(id)?;
    let short_type = type_name.rsplit("::").next().unwrap_or(type_name);
    let display_name = if name.is_empty() { "(unnamed)" } else { &name };
    Ok(format!("{display_name} [{id:?}] ({short_type})"))
}
