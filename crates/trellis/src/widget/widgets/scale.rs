//! Scale widget implementation.
//!
//! This module provides [`Scale`], a slider for picking a value from the
//! range of an [`Adjustment`] by dragging a handle along a trough.
//!
//! # Example
//!
//! ```ignore
//! use trellis::widget::widgets::{Orientation, Scale};
//!
//! let scale = Scale::with_range(0.0, 10.0, 1.0, Orientation::Horizontal)?;
//!
//! scale.adjustment().value_changed.connect(|&value| {
//!     println!("Value: {}", value);
//! });
//! ```

use std::sync::Arc;

use trellis_core::logging::describe_object;
use trellis_core::{Adjustment, Object, ObjectId, Signal};
use trellis_render::{Drawable, Rect, RenderTarget};
use trellis_style::WidgetState;

use crate::context::Context;
use crate::engine::{keys, Engine, EngineExt};
use crate::error::WidgetResult;
use crate::logging::targets;
use crate::widget::{
    Key, KeyPressEvent, MouseButton, MouseMoveEvent, MousePressEvent, MouseReleaseEvent,
    SizeHint, SizePolicy, SizePolicyPair, WheelEvent, Widget, WidgetBase, WidgetEvent,
};

use super::Orientation;

/// A slider over the range of an [`Adjustment`].
///
/// The handle's size comes from the engine properties `Scale.Slider.Length`
/// (along the axis) and `Scale.Slider.Width` (across it). Its position is
/// the adjustment's value mapped linearly onto the allocation: the lower
/// bound sits at the left (horizontal) or bottom (vertical) end.
///
/// Dragging moves the value in whole minor steps: the handle follows the
/// pointer one step at a time while the pointer is more than half a step
/// away from the handle's centre.
///
/// # Signals
///
/// - `slider_pressed()`: a drag started on the handle
/// - `slider_released()`: a drag ended
///
/// Value changes are reported by the adjustment's own `value_changed`.
pub struct Scale {
    /// Widget base.
    base: WidgetBase,

    /// Axis the handle moves along.
    orientation: Orientation,

    /// Preferred extent along the axis.
    length: f32,

    /// Preferred extent across the axis.
    width: f32,

    /// Whether a primary press started on the handle and has not been released.
    dragging: bool,

    /// The value holder, possibly shared with the owner.
    adjustment: Arc<Adjustment>,

    /// Style and drawable provider.
    engine: Arc<dyn Engine>,

    /// Signal emitted when a drag starts.
    pub slider_pressed: Signal<()>,

    /// Signal emitted when a drag ends.
    pub slider_released: Signal<()>,
}

impl Scale {
    /// Create a scale over a default adjustment (`0..100`, step 1).
    ///
    /// The scale uses the engine active in [`Context`] at creation time.
    pub fn new(orientation: Orientation) -> Self {
        let mut base = WidgetBase::new::<Self>();
        let policy = SizePolicyPair::new(SizePolicy::Expanding, SizePolicy::Fixed);
        base.set_size_policy(match orientation {
            Orientation::Horizontal => policy,
            Orientation::Vertical => policy.transposed(),
        });

        Self {
            base,
            orientation,
            length: 0.0,
            width: 0.0,
            dragging: false,
            adjustment: Arc::new(Adjustment::new()),
            engine: Context::engine(),
            slider_pressed: Signal::new(),
            slider_released: Signal::new(),
        }
    }

    /// Create a scale over `min..=max` with the given minor step.
    ///
    /// The major step is set to zero.
    pub fn with_range(min: f32, max: f32, step: f32, orientation: Orientation) -> WidgetResult<Self> {
        let scale = Self::new(orientation);
        scale.adjustment.set_range(min, max)?;
        scale.adjustment.set_increments(step, 0.0)?;
        Ok(scale)
    }

    /// Get the orientation.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Preferred extent along the axis.
    pub fn length(&self) -> f32 {
        self.length
    }

    /// Set the preferred extent along the axis.
    pub fn set_length(&mut self, length: f32) {
        if self.length != length {
            self.length = length;
            self.base.update();
        }
    }

    /// Set length using builder pattern.
    pub fn with_length(mut self, length: f32) -> Self {
        self.set_length(length);
        self
    }

    /// Preferred extent across the axis.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Set the preferred extent across the axis.
    pub fn set_width(&mut self, width: f32) {
        if self.width != width {
            self.width = width;
            self.base.update();
        }
    }

    /// Set width using builder pattern.
    pub fn with_width(mut self, width: f32) -> Self {
        self.set_width(width);
        self
    }

    /// The adjustment holding the value.
    pub fn adjustment(&self) -> &Arc<Adjustment> {
        &self.adjustment
    }

    /// Replace the adjustment. Any drag in progress ends.
    pub fn set_adjustment(&mut self, adjustment: Arc<Adjustment>) {
        self.end_drag();
        self.adjustment = adjustment;
        self.base.update();
    }

    /// The current value.
    pub fn value(&self) -> f32 {
        self.adjustment.value()
    }

    /// Set the value, clamped to the adjustment's range.
    ///
    /// Returns whether the value changed.
    pub fn set_value(&mut self, value: f32) -> bool {
        let changed = self.adjustment.set_value(value);
        if changed {
            self.base.update();
        }
        changed
    }

    /// Set value using builder pattern.
    pub fn with_value(mut self, value: f32) -> Self {
        self.set_value(value);
        self
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The engine this scale is styled and drawn by.
    pub fn engine(&self) -> &Arc<dyn Engine> {
        &self.engine
    }

    /// Use a different engine for this scale only.
    pub fn set_engine(&mut self, engine: Arc<dyn Engine>) {
        self.engine = engine;
        self.base.update();
    }

    /// Set engine using builder pattern.
    pub fn with_engine(mut self, engine: Arc<dyn Engine>) -> Self {
        self.set_engine(engine);
        self
    }

    /// The handle rectangle, relative to the allocation's origin.
    ///
    /// A degenerate range places the handle at the lower end.
    pub fn slider_rect(&self) -> Rect {
        let slider_length = self
            .engine
            .property::<f32>(keys::SCALE_SLIDER_LENGTH, self)
            .unwrap_or(0.0);
        let slider_width = self
            .engine
            .property::<f32>(keys::SCALE_SLIDER_WIDTH, self)
            .unwrap_or(0.0);

        let ratio = self.adjustment.snapshot().ratio();
        let local = self.base.rect();

        match self.orientation {
            Orientation::Horizontal => Rect::new(
                (local.width() - slider_length) * ratio,
                (local.height() - slider_width) / 2.0,
                slider_length,
                slider_width,
            ),
            Orientation::Vertical => Rect::new(
                (local.width() - slider_width) / 2.0,
                (local.height() - slider_length) * (1.0 - ratio),
                slider_width,
                slider_length,
            ),
        }
    }

    /// Start a drag if the primary button went down on the handle.
    ///
    /// Returns whether the press was handled. A second press during a drag
    /// is handled without effect.
    pub fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        if self.dragging {
            tracing::trace!(target: targets::SCALE, "press ignored, already dragging");
            return true;
        }

        let local = self.base.map_from_window(event.window_pos);
        if !self.slider_rect().contains(local) {
            self.dragging = false;
            return false;
        }

        self.dragging = true;
        self.base.update();
        tracing::debug!(
            target: targets::SCALE,
            scale = %describe_object(self.object_id()).unwrap_or_default(),
            value = self.adjustment.value(),
            "drag started"
        );
        self.slider_pressed.emit(());
        true
    }

    /// End any drag when the primary button is released.
    ///
    /// Returns `false` only for other buttons.
    pub fn handle_mouse_release(&mut self, event: &MouseReleaseEvent) -> bool {
        if event.button != MouseButton::Left {
            return false;
        }

        self.end_drag();
        true
    }

    /// Track the pointer while dragging.
    ///
    /// Returns whether a drag is in progress.
    pub fn handle_mouse_move(&mut self, event: &MouseMoveEvent) -> bool {
        if !self.dragging {
            return false;
        }

        let state = self.adjustment.snapshot();
        let range = state.range();
        if !(range > 0.0 && range.is_finite() && state.minor_step > 0.0) {
            return true;
        }
        let steps = (range / state.minor_step).max(1.0);

        let slider = self.slider_rect();
        let allocation = self.base.allocation();
        let (pointer, alloc_start, alloc_extent, handle_start, handle_extent) = match self.orientation {
            Orientation::Horizontal => (
                event.window_pos.x,
                allocation.left(),
                allocation.width(),
                slider.left(),
                slider.width(),
            ),
            Orientation::Vertical => (
                event.window_pos.y,
                allocation.top(),
                allocation.height(),
                slider.top(),
                slider.height(),
            ),
        };

        let step_distance = (alloc_extent - handle_extent) / steps;
        if !(step_distance > 0.0 && step_distance.is_finite()) {
            return true;
        }

        // Vertical scales grow upwards, against the y axis.
        let (toward_start, toward_end): (fn(&Adjustment) -> bool, fn(&Adjustment) -> bool) =
            match self.orientation {
                Orientation::Horizontal => (Adjustment::decrement, Adjustment::increment),
                Orientation::Vertical => (Adjustment::increment, Adjustment::decrement),
            };

        let mut delta = pointer - (alloc_start + handle_start + handle_extent / 2.0);
        let mut moved = 0u32;

        while delta < -step_distance / 2.0 {
            if !toward_start(&self.adjustment) {
                break;
            }
            delta += step_distance;
            moved += 1;
        }

        while delta > step_distance / 2.0 {
            if !toward_end(&self.adjustment) {
                break;
            }
            delta -= step_distance;
            moved += 1;
        }

        if moved > 0 {
            self.base.update();
            tracing::trace!(
                target: targets::SCALE,
                steps = moved,
                value = self.adjustment.value(),
                "drag tracked"
            );
        }
        true
    }

    /// Step the value by the minor step per wheel notch.
    pub fn handle_wheel(&mut self, event: &WheelEvent) -> bool {
        let notches = event.vertical_notches();
        if notches == 0 {
            return false;
        }

        let step: fn(&Adjustment) -> bool = if notches > 0 {
            Adjustment::increment
        } else {
            Adjustment::decrement
        };

        for _ in 0..notches.unsigned_abs() {
            if !step(&self.adjustment) {
                break;
            }
        }
        self.base.update();
        true
    }

    /// Arrow keys step by the minor step, Page Up/Down by the major step,
    /// Home and End jump to the bounds.
    pub fn handle_key_press(&mut self, event: &KeyPressEvent) -> bool {
        let adjustment = &self.adjustment;
        match event.key {
            Key::ArrowRight | Key::ArrowUp => {
                adjustment.increment();
            }
            Key::ArrowLeft | Key::ArrowDown => {
                adjustment.decrement();
            }
            Key::PageUp => {
                adjustment.increment_page();
            }
            Key::PageDown => {
                adjustment.decrement_page();
            }
            Key::Home => {
                adjustment.set_value(adjustment.lower());
            }
            Key::End => {
                adjustment.set_value(adjustment.upper());
            }
            _ => return false,
        }
        self.base.update();
        true
    }

    fn end_drag(&mut self) {
        if !self.dragging {
            return;
        }
        self.dragging = false;
        self.base.update();
        tracing::debug!(
            target: targets::SCALE,
            value = self.adjustment.value(),
            "drag ended"
        );
        self.slider_released.emit(());
    }
}

impl Object for Scale {
    fn object_id(&self) -> ObjectId {
        self.base.object_id()
    }
}

impl Widget for Scale {
    fn widget_base(&self) -> &WidgetBase {
        &self.base
    }

    fn widget_base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn size_hint(&self) -> SizeHint {
        let hint = SizeHint::from_dimensions(self.length, self.width);
        match self.orientation {
            Orientation::Horizontal => hint,
            Orientation::Vertical => hint.transposed(),
        }
    }

    fn style_class(&self) -> &'static str {
        "Scale"
    }

    fn style_state(&self) -> WidgetState {
        WidgetState {
            hovered: self.base.is_hovered(),
            pressed: self.dragging,
            enabled: self.base.is_enabled(),
        }
    }

    /// Disabling a scale mid-drag ends the drag.
    fn set_enabled(&mut self, enabled: bool) {
        if !enabled {
            self.end_drag();
        }
        self.base.set_enabled(enabled);
    }

    fn create_drawable(&self, target: &RenderTarget) -> Drawable {
        self.engine.create_scale_drawable(self, target)
    }

    fn event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseRelease(e) => self.handle_mouse_release(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e),
            WidgetEvent::Wheel(e) => self.handle_wheel(e),
            WidgetEvent::KeyPress(e) => self.handle_key_press(e),
            WidgetEvent::Enter(_) => {
                self.base.set_hovered(true);
                false
            }
            WidgetEvent::Leave(_) => {
                self.base.set_hovered(false);
                false
            }
        };
        if handled {
            event.accept();
        }
        handled
    }
}

impl std::fmt::Debug for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scale")
            .field("base", &self.base)
            .field("orientation", &self.orientation)
            .field("length", &self.length)
            .field("width", &self.width)
            .field("dragging", &self.dragging)
            .field("adjustment", &self.adjustment)
            .finish_non_exhaustive()
    }
}

// Ensure Scale is Send + Sync
static_assertions::assert_impl_all!(Scale: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::BrewEngine;
    use crate::widget::{KeyboardModifiers, LeaveEvent, EnterEvent};
    use std::sync::atomic::{AtomicU32, Ordering};
    use trellis_render::Point;

    fn engine(css: &str) -> Arc<dyn Engine> {
        let engine = BrewEngine::new();
        engine.load_theme(css).unwrap();
        Arc::new(engine)
    }

    fn ten_by_ten() -> Arc<dyn Engine> {
        engine("Scale { Slider.Length: 10; Slider.Width: 10; }")
    }

    fn scale(orientation: Orientation, allocation: Rect) -> Scale {
        let mut scale = Scale::with_range(0.0, 10.0, 1.0, orientation)
            .unwrap()
            .with_engine(ten_by_ten());
        scale.set_allocation(allocation);
        scale
    }

    fn press(x: f32, y: f32) -> MousePressEvent {
        MousePressEvent::new(
            MouseButton::Left,
            Point::new(x, y),
            Point::new(x, y),
            KeyboardModifiers::NONE,
        )
    }

    fn release(button: MouseButton) -> MouseReleaseEvent {
        MouseReleaseEvent::new(button, Point::ZERO, Point::ZERO, KeyboardModifiers::NONE)
    }

    fn move_to(x: f32, y: f32) -> MouseMoveEvent {
        MouseMoveEvent::new(Point::new(x, y), Point::new(x, y), 1, KeyboardModifiers::NONE)
    }

    #[test]
    fn test_scale_creation() {
        let scale = Scale::new(Orientation::Vertical);
        assert_eq!(scale.orientation(), Orientation::Vertical);
        assert_eq!(scale.length(), 0.0);
        assert_eq!(scale.width(), 0.0);
        assert!(!scale.is_dragging());
        assert_eq!(scale.adjustment().lower(), 0.0);
        assert_eq!(scale.adjustment().upper(), 100.0);
        assert_eq!(scale.widget_base().size_policy().vertical, SizePolicy::Expanding);
    }

    #[test]
    fn test_with_range_sets_increments() {
        let scale = Scale::with_range(-5.0, 5.0, 0.5, Orientation::Horizontal).unwrap();
        let state = scale.adjustment().snapshot();
        assert_eq!((state.lower, state.upper), (-5.0, 5.0));
        assert_eq!(state.minor_step, 0.5);
        assert_eq!(state.major_step, 0.0);
        assert_eq!(state.value, 0.0);
    }

    #[test]
    fn test_with_range_rejects_empty_range() {
        assert!(Scale::with_range(3.0, 3.0, 1.0, Orientation::Horizontal).is_err());
        assert!(Scale::with_range(0.0, 1.0, 0.0, Orientation::Horizontal).is_err());
    }

    #[test]
    fn test_size_hint_follows_orientation() {
        let horizontal = Scale::new(Orientation::Horizontal)
            .with_length(120.0)
            .with_width(16.0);
        assert_eq!(horizontal.size_hint().preferred.width, 120.0);
        assert_eq!(horizontal.size_hint().preferred.height, 16.0);

        let vertical = Scale::new(Orientation::Vertical)
            .with_length(120.0)
            .with_width(16.0);
        assert_eq!(vertical.size_hint().preferred.width, 16.0);
        assert_eq!(vertical.size_hint().preferred.height, 120.0);
    }

    #[test]
    fn test_slider_rect_at_midpoint() {
        let scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0)).with_value(5.0);
        assert_eq!(scale.slider_rect(), Rect::new(50.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_vertical_slider_rect_inverts() {
        let scale = scale(Orientation::Vertical, Rect::new(0.0, 0.0, 20.0, 110.0));
        assert_eq!(scale.slider_rect(), Rect::new(5.0, 100.0, 10.0, 10.0));

        let scale = scale.with_value(10.0);
        assert_eq!(scale.slider_rect(), Rect::new(5.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn test_slider_rect_uses_builtin_metrics() {
        let mut scale = Scale::new(Orientation::Horizontal).with_engine(Arc::new(BrewEngine::new()));
        scale.set_allocation(Rect::new(0.0, 0.0, 120.0, 30.0));
        assert_eq!(scale.slider_rect(), Rect::new(0.0, 10.0, 20.0, 10.0));
    }

    #[test]
    fn test_press_starts_and_release_ends_drag() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        let pressed = Arc::new(AtomicU32::new(0));
        let released = Arc::new(AtomicU32::new(0));
        let p = pressed.clone();
        let r = released.clone();
        scale.slider_pressed.connect(move |_| {
            p.fetch_add(1, Ordering::SeqCst);
        });
        scale.slider_released.connect(move |_| {
            r.fetch_add(1, Ordering::SeqCst);
        });

        assert!(scale.handle_mouse_press(&press(5.0, 5.0)));
        assert!(scale.is_dragging());
        assert!(scale.style_state().pressed);

        // A second press changes nothing.
        assert!(scale.handle_mouse_press(&press(100.0, 5.0)));
        assert!(scale.is_dragging());
        assert_eq!(pressed.load(Ordering::SeqCst), 1);

        assert!(scale.handle_mouse_release(&release(MouseButton::Left)));
        assert!(!scale.is_dragging());
        assert_eq!(released.load(Ordering::SeqCst), 1);

        // Releasing again is still handled but emits nothing.
        assert!(scale.handle_mouse_release(&release(MouseButton::Left)));
        assert_eq!(released.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_non_primary_buttons_are_ignored() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        let right = MousePressEvent::new(
            MouseButton::Right,
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            KeyboardModifiers::NONE,
        );
        assert!(!scale.handle_mouse_press(&right));
        assert!(!scale.is_dragging());

        assert!(scale.handle_mouse_press(&press(5.0, 5.0)));
        assert!(!scale.handle_mouse_release(&release(MouseButton::Right)));
        assert!(scale.is_dragging());
    }

    #[test]
    fn test_press_uses_window_coordinates() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(40.0, 30.0, 110.0, 10.0));
        assert!(!scale.handle_mouse_press(&press(5.0, 5.0)));
        assert!(scale.handle_mouse_press(&press(45.0, 35.0)));
    }

    #[test]
    fn test_move_without_drag_is_noop() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        assert!(!scale.handle_mouse_move(&move_to(90.0, 5.0)));
        assert_eq!(scale.value(), 0.0);
    }

    #[test]
    fn test_vertical_drag_up_increases() {
        let mut scale = scale(Orientation::Vertical, Rect::new(0.0, 0.0, 20.0, 110.0));
        assert!(scale.handle_mouse_press(&press(10.0, 105.0)));
        assert!(scale.handle_mouse_move(&move_to(10.0, 75.0)));
        assert_eq!(scale.value(), 3.0);

        scale.handle_mouse_move(&move_to(10.0, 95.0));
        assert_eq!(scale.value(), 1.0);
    }

    #[test]
    fn test_drag_with_degenerate_step_distance_is_skipped() {
        // Allocation no wider than the handle leaves no room to move.
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert!(scale.handle_mouse_press(&press(5.0, 5.0)));
        assert!(scale.handle_mouse_move(&move_to(500.0, 5.0)));
        assert_eq!(scale.value(), 0.0);
    }

    #[test]
    fn test_keyboard_navigation() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        scale.adjustment().set_increments(1.0, 4.0).unwrap();
        let key = |key| KeyPressEvent::new(key, KeyboardModifiers::NONE, false);

        assert!(scale.handle_key_press(&key(Key::ArrowRight)));
        assert_eq!(scale.value(), 1.0);
        assert!(scale.handle_key_press(&key(Key::PageUp)));
        assert_eq!(scale.value(), 5.0);
        assert!(scale.handle_key_press(&key(Key::ArrowDown)));
        assert_eq!(scale.value(), 4.0);
        assert!(scale.handle_key_press(&key(Key::End)));
        assert_eq!(scale.value(), 10.0);
        assert!(scale.handle_key_press(&key(Key::PageDown)));
        assert_eq!(scale.value(), 6.0);
        assert!(scale.handle_key_press(&key(Key::Home)));
        assert_eq!(scale.value(), 0.0);
        assert!(!scale.handle_key_press(&key(Key::Other(32))));
    }

    #[test]
    fn test_wheel_steps_per_notch() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        let wheel = |dy| WheelEvent::new(Point::ZERO, Point::ZERO, 0.0, dy, KeyboardModifiers::NONE);

        assert!(scale.handle_wheel(&wheel(240.0)));
        assert_eq!(scale.value(), 2.0);
        assert!(scale.handle_wheel(&wheel(-30.0)));
        assert_eq!(scale.value(), 1.0);
        assert!(!scale.handle_wheel(&wheel(0.0)));
    }

    #[test]
    fn test_hover_selects_style_state() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        let mut enter = WidgetEvent::Enter(EnterEvent::new(Point::ZERO));
        assert!(!scale.event(&mut enter));
        assert!(scale.style_state().hovered);

        let mut leave = WidgetEvent::Leave(LeaveEvent::new());
        scale.event(&mut leave);
        assert!(!scale.style_state().hovered);
    }

    #[test]
    fn test_set_adjustment_ends_drag() {
        let mut scale = scale(Orientation::Horizontal, Rect::new(0.0, 0.0, 110.0, 10.0));
        assert!(scale.handle_mouse_press(&press(5.0, 5.0)));

        let shared = Arc::new(Adjustment::with_range(0.0, 4.0).unwrap());
        scale.set_adjustment(shared.clone());
        assert!(!scale.is_dragging());

        shared.set_value(2.0);
        assert_eq!(scale.value(), 2.0);
    }
}
