//! Tracing targets for the styling system.

/// Target names for log filtering.
pub mod targets {
    /// Stylesheet parsing, including skipped rules and declarations.
    pub const PARSER: &str = "trellis_style::parser";
    /// Property resolution.
    pub const ENGINE: &str = "trellis_style::engine";
}
