//! Trellis - a themable retained-mode widget toolkit slice.
//!
//! This is the umbrella crate: it re-exports the core systems and adds the
//! widget layer, the rendering engines and the global [`Context`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use trellis::prelude::*;
//!
//! let engine = BrewEngine::new();
//! engine.load_theme("Scale { Slider.Length: 10; Slider.Width: 10; }").unwrap();
//!
//! let mut scale = Scale::with_range(0.0, 10.0, 1.0, Orientation::Horizontal)
//!     .unwrap()
//!     .with_engine(Arc::new(engine));
//! scale.set_allocation(Rect::new(0.0, 0.0, 110.0, 10.0));
//! scale.set_value(5.0);
//!
//! assert_eq!(scale.slider_rect(), Rect::new(50.0, 0.0, 10.0, 10.0));
//! ```

pub use trellis_core::*;

/// Geometry, colours and drawables.
pub mod render {
    pub use trellis_render::*;
}

/// Theme stylesheets and property resolution.
pub mod style {
    pub use trellis_style::*;
}

mod context;
pub mod engine;
mod error;
pub mod logging;
pub mod prelude;
pub mod widget;

pub use context::Context;
pub use error::{WidgetError, WidgetResult};
