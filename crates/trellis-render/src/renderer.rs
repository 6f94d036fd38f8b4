//! The drawing interface engines paint through.

use crate::drawable::{DrawCommand, Drawable};
use crate::paint::Stroke;
use crate::types::{Color, Point, Rect};

/// 2D drawing calls plus a stack of saved translations.
///
/// ```
/// use trellis_render::{Color, RecordingRenderer, Rect, Renderer};
///
/// let mut renderer = RecordingRenderer::new();
/// renderer.save();
/// renderer.translate(10.0, 10.0);
/// renderer.fill_rect(Rect::new(0.0, 0.0, 5.0, 5.0), Color::RED);
/// renderer.restore();
///
/// let drawable = renderer.finish();
/// assert_eq!(drawable.bounds(), Some(Rect::new(10.0, 10.0, 5.0, 5.0)));
/// ```
pub trait Renderer {
    /// Push the current translation.
    fn save(&mut self);

    /// Pop back to the last saved translation, if any.
    fn restore(&mut self);

    fn translate(&mut self, tx: f32, ty: f32);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outline `rect`, keeping the stroke inside it.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);
}

/// Captures draw calls into a [`Drawable`] in absolute coordinates.
///
/// Shapes that would not touch any pixel (empty rectangles, zero-width
/// strokes) are dropped instead of recorded.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    offset: Point,
    saved: Vec<Point>,
    drawable: Drawable,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> Drawable {
        if !self.saved.is_empty() {
            tracing::warn!(
                target: "trellis_render::renderer",
                unmatched = self.saved.len(),
                "save without restore"
            );
        }
        self.drawable
    }

    fn place(&self, point: Point) -> Point {
        point.offset(self.offset.x, self.offset.y)
    }

    fn place_rect(&self, rect: Rect) -> Rect {
        rect.offset(self.offset.x, self.offset.y)
    }
}

impl Renderer for RecordingRenderer {
    fn save(&mut self) {
        self.saved.push(self.offset);
    }

    fn restore(&mut self) {
        if let Some(offset) = self.saved.pop() {
            self.offset = offset;
        }
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.offset = self.offset.offset(tx, ty);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if !rect.is_empty() {
            let rect = self.place_rect(rect);
            self.drawable.push(DrawCommand::FillRect { rect, color });
        }
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        if !rect.is_empty() && !stroke.is_invisible() {
            let rect = self.place_rect(rect);
            self.drawable.push(DrawCommand::StrokeRect {
                rect,
                stroke: *stroke,
            });
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        if !stroke.is_invisible() {
            let (from, to) = (self.place(from), self.place(to));
            self.drawable.push(DrawCommand::Line {
                from,
                to,
                stroke: *stroke,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_pops_one_level() {
        let mut renderer = RecordingRenderer::new();
        renderer.translate(10.0, 20.0);
        renderer.save();
        renderer.translate(5.0, 5.0);
        assert_eq!(renderer.offset, Point::new(15.0, 25.0));

        renderer.restore();
        assert_eq!(renderer.offset, Point::new(10.0, 20.0));
        assert!(renderer.saved.is_empty());
    }

    #[test]
    fn unmatched_restore_keeps_offset() {
        let mut renderer = RecordingRenderer::new();
        renderer.translate(1.0, 1.0);
        renderer.restore();
        assert_eq!(renderer.offset, Point::new(1.0, 1.0));
    }

    #[test]
    fn invisible_shapes_are_dropped() {
        let mut renderer = RecordingRenderer::new();
        renderer.fill_rect(Rect::new(0.0, 0.0, 0.0, 10.0), Color::RED);
        renderer.stroke_rect(Rect::new(0.0, 0.0, 10.0, 10.0), &Stroke::new(Color::RED, 0.0));
        renderer.draw_line(Point::ZERO, Point::new(4.0, 0.0), &Stroke::new(Color::TRANSPARENT, 1.0));
        assert!(renderer.finish().is_empty());
    }
}
