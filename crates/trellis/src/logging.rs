//! Log targets for the widget layer.
//!
//! Pair these with the targets in [`trellis_core::logging`] and
//! [`trellis_style::logging`] when building a `tracing` filter, e.g.
//! `trellis::widget::scale=trace` to follow drag tracking step by step.

/// Target names for log filtering.
pub mod targets {
    /// Engine selection, theme loading and drawable creation.
    pub const ENGINE: &str = "trellis::engine";
    /// Event dispatch.
    pub const DISPATCH: &str = "trellis::widget::dispatch";
    /// The Scale widget.
    pub const SCALE: &str = "trellis::widget::scale";
}
