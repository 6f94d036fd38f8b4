//! The [`Widget`] trait.

use trellis_core::Object;
use trellis_render::{Drawable, Rect, RenderTarget};
use trellis_style::WidgetState;

use super::base::WidgetBase;
use super::events::WidgetEvent;
use super::geometry::SizeHint;

/// A control that can be allocated, drawn and sent events.
///
/// Only the base accessors, [`size_hint`](Widget::size_hint),
/// [`style_class`](Widget::style_class) and
/// [`create_drawable`](Widget::create_drawable) are required. The rest
/// forward to the [`WidgetBase`].
pub trait Widget: Object + Send + Sync {
    /// The shared state this widget embeds.
    fn widget_base(&self) -> &WidgetBase;

    /// Mutable access to the shared state.
    fn widget_base_mut(&mut self) -> &mut WidgetBase;

    /// The size this widget would like its owner to allocate.
    fn size_hint(&self) -> SizeHint;

    /// Type name theme rules select on, such as `"Scale"`.
    fn style_class(&self) -> &'static str;

    /// Draw commands for the current state, in window coordinates.
    fn create_drawable(&self, target: &RenderTarget) -> Drawable;

    /// Which of `:hover`, `:pressed` and `:disabled` currently apply.
    fn style_state(&self) -> WidgetState {
        let base = self.widget_base();
        WidgetState {
            hovered: base.is_hovered(),
            pressed: false,
            enabled: base.is_enabled(),
        }
    }

    /// [`create_drawable`](Widget::create_drawable), then clear the repaint
    /// flag.
    fn invalidate(&mut self, target: &RenderTarget) -> Drawable {
        let drawable = self.create_drawable(target);
        self.widget_base_mut().clear_repaint_flag();
        drawable
    }

    /// The assigned rectangle, in window coordinates.
    fn allocation(&self) -> Rect {
        self.widget_base().allocation()
    }

    /// Assign a new rectangle. See [`WidgetBase::set_allocation`].
    fn set_allocation(&mut self, rect: Rect) {
        self.widget_base_mut().set_allocation(rect);
    }

    /// Whether the widget is shown.
    fn is_visible(&self) -> bool {
        self.widget_base().is_visible()
    }

    /// Show or hide the widget.
    fn set_visible(&mut self, visible: bool) {
        self.widget_base_mut().set_visible(visible);
    }

    /// Whether the widget accepts input.
    fn is_enabled(&self) -> bool {
        self.widget_base().is_enabled()
    }

    /// Enable or disable input. A disabled widget still receives releases.
    fn set_enabled(&mut self, enabled: bool) {
        self.widget_base_mut().set_enabled(enabled);
    }

    /// Whether the last drawable is stale.
    fn needs_repaint(&self) -> bool {
        self.widget_base().needs_repaint()
    }

    /// Mark the widget for repaint.
    fn update(&mut self) {
        self.widget_base_mut().update();
    }

    /// Handle `event`, returning `true` if it was consumed. Ignores
    /// everything by default.
    fn event(&mut self, _event: &mut WidgetEvent) -> bool {
        false
    }
}
