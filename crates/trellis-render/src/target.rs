//! Render targets.
//!
//! A [`RenderTarget`] describes the surface a drawable is produced for: its
//! size in physical pixels and the scale factor between logical and physical
//! pixels. Drawables snap their geometry to the target's pixel grid.

use crate::error::{RenderError, RenderResult};
use crate::types::{Point, Rect, Size};

/// Description of the surface a drawable is built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTarget {
    width: u32,
    height: u32,
    scale_factor: f32,
}

impl RenderTarget {
    /// Create a target of the given physical size with a scale factor of 1.
    pub fn new(width: u32, height: u32) -> RenderResult<Self> {
        if width == 0 || height == 0 {
            return Err(RenderError::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            scale_factor: 1.0,
        })
    }

    /// Set the logical-to-physical scale factor.
    pub fn with_scale_factor(mut self, scale_factor: f32) -> RenderResult<Self> {
        if !(scale_factor > 0.0 && scale_factor.is_finite()) {
            return Err(RenderError::InvalidScaleFactor(scale_factor));
        }
        self.scale_factor = scale_factor;
        Ok(self)
    }

    /// Physical width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Physical height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Logical-to-physical scale factor.
    pub fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    /// Size in logical pixels.
    pub fn logical_size(&self) -> Size {
        Size::new(
            self.width as f32 / self.scale_factor,
            self.height as f32 / self.scale_factor,
        )
    }

    /// Round a logical coordinate to the nearest device pixel.
    #[inline]
    pub fn snap(&self, value: f32) -> f32 {
        (value * self.scale_factor).round() / self.scale_factor
    }

    /// Snap a point to the device pixel grid.
    #[inline]
    pub fn snap_point(&self, point: Point) -> Point {
        Point::new(self.snap(point.x), self.snap(point.y))
    }

    /// Snap a rectangle's edges to the device pixel grid.
    pub fn snap_rect(&self, rect: Rect) -> Rect {
        let left = self.snap(rect.left());
        let top = self.snap(rect.top());
        let right = self.snap(rect.right());
        let bottom = self.snap(rect.bottom());
        Rect::new(left, top, right - left, bottom - top)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_is_rejected() {
        assert_eq!(
            RenderTarget::new(0, 10),
            Err(RenderError::InvalidDimensions { width: 0, height: 10 })
        );
    }

    #[test]
    fn test_invalid_scale_factor() {
        let target = RenderTarget::new(10, 10).unwrap();
        assert!(target.with_scale_factor(0.0).is_err());
        assert!(target.with_scale_factor(f32::NAN).is_err());
    }

    #[test]
    fn test_snap_at_scale_one() {
        let target = RenderTarget::new(100, 100).unwrap();
        assert_eq!(
            target.snap_rect(Rect::new(10.4, 0.6, 9.8, 10.0)),
            Rect::new(10.0, 1.0, 10.0, 10.0)
        );
    }

    #[test]
    fn test_snap_at_scale_two() {
        let target = RenderTarget::new(200, 200)
            .unwrap()
            .with_scale_factor(2.0)
            .unwrap();
        assert_eq!(target.snap(10.3), 10.5);
        assert_eq!(target.logical_size(), Size::new(100.0, 100.0));
    }
}
