//! Stroke styles for outlines and lines.

use crate::types::Color;

/// How an outline or line is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in logical pixels.
    pub width: f32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self { color, width }
    }

    /// Whether drawing this stroke would produce no pixels.
    #[inline]
    pub fn is_invisible(&self) -> bool {
        self.width <= 0.0 || self.color.a == 0.0
    }
}
