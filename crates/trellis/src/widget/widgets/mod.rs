//! Built-in widgets.

mod scale;

pub use scale::Scale;

/// Axis a ranged widget runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Left to right; values grow to the right.
    #[default]
    Horizontal,
    /// Top to bottom; values grow upwards.
    Vertical,
}
