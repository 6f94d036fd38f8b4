//! Prelude module for Trellis.
//!
//! ```ignore
//! use trellis::prelude::*;
//! ```
//!
//! This provides access to:
//! - Signals and the `Adjustment` value holder
//! - Widget foundation (`Widget`, `WidgetBase`, events)
//! - The `Scale` widget
//! - Engines (`Engine`, `EngineExt`, `BrewEngine`, `Context`)
//! - Geometry types (`Point`, `Size`, `Rect`, `Color`)

// ============================================================================
// Core
// ============================================================================

pub use trellis_core::{Adjustment, ConnectionId, Object, ObjectId, Signal};

// ============================================================================
// Widget Foundation
// ============================================================================

pub use crate::widget::{
    DispatchResult, EventDispatcher, Key, KeyPressEvent, KeyboardModifiers, MouseButton,
    MouseMoveEvent, MousePressEvent, MouseReleaseEvent, SizeHint, SizePolicy, WheelEvent, Widget,
    WidgetAccess, WidgetBase, WidgetEvent,
};

// ============================================================================
// Widgets
// ============================================================================

pub use crate::widget::widgets::{Orientation, Scale};

// ============================================================================
// Engines
// ============================================================================

pub use crate::engine::{BrewEngine, Engine, EngineExt};
pub use crate::{Context, WidgetError, WidgetResult};

// ============================================================================
// Rendering
// ============================================================================

pub use trellis_render::{Color, Drawable, Point, Rect, RenderTarget, Size};
