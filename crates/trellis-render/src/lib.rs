//! Rendering types for Trellis.
//!
//! This crate provides the geometry and colour types shared by every Trellis
//! crate, and the drawing interface widget engines paint through:
//!
//! - [`Point`], [`Size`], [`Rect`] and premultiplied [`Color`]
//! - [`RenderTarget`], describing the surface and its device pixel grid
//! - [`Renderer`], the 2D drawing trait
//! - [`RecordingRenderer`] and [`Drawable`], which capture draw calls as a
//!   replayable command list
//!
//! # Recording a Drawable
//!
//! ```
//! use trellis_render::{Color, DrawCommand, RecordingRenderer, Rect, Renderer, Stroke};
//!
//! let mut renderer = RecordingRenderer::new();
//! renderer.fill_rect(Rect::new(0.0, 0.0, 20.0, 10.0), Color::GRAY);
//! renderer.stroke_rect(Rect::new(0.0, 0.0, 20.0, 10.0), &Stroke::new(Color::BLACK, 1.0));
//!
//! let drawable = renderer.finish();
//! assert_eq!(drawable.len(), 2);
//! assert!(matches!(drawable.commands()[0], DrawCommand::FillRect { .. }));
//! ```

mod drawable;
mod error;
mod paint;
mod renderer;
mod target;
mod types;

pub use drawable::{DrawCommand, Drawable};
pub use error::{RenderError, RenderResult};
pub use paint::Stroke;
pub use renderer::{RecordingRenderer, Renderer};
pub use target::RenderTarget;
pub use types::{Color, Point, Rect, Size};
