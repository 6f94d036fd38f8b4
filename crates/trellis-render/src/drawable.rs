//! Recorded draw command lists.

use crate::paint::Stroke;
use crate::renderer::Renderer;
use crate::types::{Color, Point, Rect};

/// A single recorded drawing operation, in absolute coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// A filled rectangle.
    FillRect { rect: Rect, color: Color },
    /// A rectangle outline drawn inside `rect`.
    StrokeRect { rect: Rect, stroke: Stroke },
    /// A straight line.
    Line { from: Point, to: Point, stroke: Stroke },
}

impl DrawCommand {
    /// The area this command may touch.
    pub fn bounds(&self) -> Rect {
        match *self {
            Self::FillRect { rect, .. } | Self::StrokeRect { rect, .. } => rect,
            Self::Line { from, to, stroke } => {
                let half = stroke.width / 2.0;
                let left = from.x.min(to.x) - half;
                let top = from.y.min(to.y) - half;
                let right = from.x.max(to.x) + half;
                let bottom = from.y.max(to.y) + half;
                Rect::new(left, top, right - left, bottom - top)
            }
        }
    }
}

/// An ordered list of draw commands produced for one widget.
///
/// Drawables are built by engines through a
/// [`RecordingRenderer`](crate::RecordingRenderer) and can be replayed onto
/// any other [`Renderer`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Drawable {
    commands: Vec<DrawCommand>,
}

impl Drawable {
    /// Create an empty drawable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a command.
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// The recorded commands, in drawing order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounding box of every command, or `None` when empty.
    pub fn bounds(&self) -> Option<Rect> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|acc, r| acc.union(&r))
    }

    /// Replay every command onto another renderer.
    pub fn replay<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for command in &self.commands {
            match command {
                DrawCommand::FillRect { rect, color } => renderer.fill_rect(*rect, *color),
                DrawCommand::StrokeRect { rect, stroke } => renderer.stroke_rect(*rect, stroke),
                DrawCommand::Line { from, to, stroke } => renderer.draw_line(*from, *to, stroke),
            }
        }
    }
}
