//! CSS-like theme styling for Trellis.
//!
//! This crate provides the style/metrics side of a Trellis engine:
//!
//! - **Selectors**: Type, universal, `#name` and state pseudo-class selectors
//! - **Cascading**: Stylesheet priority, specificity and source order
//! - **CSS Parsing**: Themes are CSS text with dotted property names, loaded
//!   from strings or files
//! - **Typed lookups**: [`FromPropertyValue`] converts declared values to
//!   `f32`, [`Color`](trellis_render::Color) or `String`
//!
//! # Example
//!
//! ```
//! use trellis_style::prelude::*;
//!
//! let sheet = StyleSheet::from_css(
//!     "Scale { Slider.Length: 20px; Slider.Width: 10px; }",
//!     StylePriority::Theme,
//! )
//! .unwrap();
//!
//! let mut engine = StyleEngine::new();
//! engine.add_stylesheet(sheet);
//!
//! let scale = WidgetMatchContext::new("Scale");
//! assert_eq!(engine.get::<f32>("Scale.Slider.Width", &scale), Some(10.0));
//! ```

pub mod logging;
pub mod parser;
pub mod resolve;
pub mod rules;
pub mod selector;
mod error;
mod value;

pub use error::{Error, Result};
pub use resolve::StyleEngine;
pub use rules::{Declaration, StylePriority, StyleRule, StyleSheet};
pub use selector::{PseudoClass, Selector, Specificity, WidgetMatchContext, WidgetState};
pub use value::{FromPropertyValue, PropertyValue};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::resolve::StyleEngine;
    pub use crate::rules::{Declaration, StylePriority, StyleRule, StyleSheet};
    pub use crate::selector::{
        PseudoClass, Selector, SelectorMatcher, Specificity, TypeSelector, WidgetMatchContext,
        WidgetState,
    };
    pub use crate::value::{FromPropertyValue, PropertyValue};
}
