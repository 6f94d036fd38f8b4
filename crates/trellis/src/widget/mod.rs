//! Widget system for Trellis.
//!
//! This module provides:
//!
//! - [`Widget`] trait: The base trait for all controls
//! - [`WidgetBase`]: Allocation, visibility, enabled and hover state
//! - Size hints and policies
//! - Widget events and the [`EventDispatcher`]
//! - The built-in widgets in [`widgets`]
//!
//! # Creating a Widget
//!
//! 1. Define a struct with a `WidgetBase` field
//! 2. Implement the `Widget` trait
//! 3. Provide `size_hint()` and a `style_class()` for theme lookups
//! 4. Build a [`Drawable`](trellis_render::Drawable) in `create_drawable()`
//!
//! ```ignore
//! use trellis::widget::*;
//! use trellis_render::{Color, Drawable, DrawCommand, RenderTarget};
//!
//! struct Swatch {
//!     base: WidgetBase,
//! }
//!
//! impl Widget for Swatch {
//!     fn widget_base(&self) -> &WidgetBase { &self.base }
//!     fn widget_base_mut(&mut self) -> &mut WidgetBase { &mut self.base }
//!
//!     fn size_hint(&self) -> SizeHint {
//!         SizeHint::from_dimensions(16.0, 16.0)
//!     }
//!
//!     fn style_class(&self) -> &'static str {
//!         "Swatch"
//!     }
//!
//!     fn create_drawable(&self, target: &RenderTarget) -> Drawable {
//!         let mut drawable = Drawable::new();
//!         drawable.push(DrawCommand::FillRect {
//!             rect: target.snap_rect(self.allocation()),
//!             color: Color::RED,
//!         });
//!         drawable
//!     }
//! }
//! ```

mod base;
mod dispatcher;
mod events;
mod geometry;
mod traits;
pub mod widgets;


pub use base::WidgetBase;
pub use dispatcher::{DispatchResult, EventDispatcher, WidgetAccess};
pub use events::{
    ButtonEvent, EnterEvent, EventBase, Key, KeyPressEvent, KeyboardModifiers, LeaveEvent,
    MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent, WHEEL_DELTA_PER_NOTCH,
    WheelEvent, WidgetEvent,
};
pub use geometry::{SizeHint, SizePolicy, SizePolicyPair};
pub use traits::Widget;
