//! State shared by every widget.

use trellis_core::{Object, ObjectBase, ObjectId, Signal};
use trellis_render::{Point, Rect};

use super::geometry::SizePolicyPair;

/// Identity, allocation and flags common to all widgets.
///
/// A widget embeds one of these and hands it out through
/// [`Widget::widget_base`](super::Widget::widget_base). The allocation is
/// whatever rectangle the owner assigned, in window coordinates; there is no
/// parent widget to be relative to.
///
/// Any setter that changes something visible marks the widget for repaint.
pub struct WidgetBase {
    object: ObjectBase,
    allocation: Rect,
    size_policy: SizePolicyPair,
    visible: bool,
    enabled: bool,
    hovered: bool,
    dirty: bool,

    /// Emitted with the new allocation whenever it changes.
    pub geometry_changed: Signal<Rect>,
}

/// Store `value` in `slot`, reporting whether anything changed.
fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}

impl WidgetBase {
    /// A visible, enabled base registered as a `T`, with an empty allocation.
    pub fn new<T: Object>() -> Self {
        Self {
            object: ObjectBase::new::<T>(),
            allocation: Rect::ZERO,
            size_policy: SizePolicyPair::default(),
            visible: true,
            enabled: true,
            hovered: false,
            dirty: true,
            geometry_changed: Signal::new(),
        }
    }

    /// This widget's id in the object registry.
    #[inline]
    pub fn object_id(&self) -> ObjectId {
        self.object.id()
    }

    /// The widget's name, empty until one is set.
    pub fn name(&self) -> String {
        self.object.name()
    }

    /// Rename the widget. `#name` theme rules match against this.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.object.set_name(name);
        self.dirty = true;
    }

    /// The assigned rectangle, in window coordinates.
    #[inline]
    pub fn allocation(&self) -> Rect {
        self.allocation
    }

    /// Assign a new rectangle. Emits `geometry_changed` and marks the
    /// widget for repaint when it differs from the current one.
    pub fn set_allocation(&mut self, rect: Rect) {
        if replace(&mut self.allocation, rect) {
            self.dirty = true;
            self.geometry_changed.emit(rect);
        }
    }

    /// The allocation moved to the origin.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(Point::ZERO, self.allocation.size)
    }

    /// How the widget wants its allocation to grow or shrink.
    pub fn size_policy(&self) -> SizePolicyPair {
        self.size_policy
    }

    /// Replace both axes' policies.
    pub fn set_size_policy(&mut self, policy: SizePolicyPair) {
        self.size_policy = policy;
    }

    /// Whether the widget is shown. Defaults to `true`.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide the widget.
    pub fn set_visible(&mut self, visible: bool) {
        self.dirty |= replace(&mut self.visible, visible);
    }

    /// Whether the widget accepts input. Defaults to `true`.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable input.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.dirty |= replace(&mut self.enabled, enabled);
    }

    /// Whether the pointer is inside the allocation.
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Driven by enter and leave events. Returns whether the state flipped.
    pub(crate) fn set_hovered(&mut self, hovered: bool) -> bool {
        let flipped = replace(&mut self.hovered, hovered);
        self.dirty |= flipped;
        flipped
    }

    /// Whether the last drawable is stale.
    #[inline]
    pub fn needs_repaint(&self) -> bool {
        self.dirty
    }

    /// Mark the widget for repaint.
    pub fn update(&mut self) {
        self.dirty = true;
    }

    /// Called once a fresh drawable has been built.
    pub(crate) fn clear_repaint_flag(&mut self) {
        self.dirty = false;
    }

    /// Window coordinates to allocation-relative coordinates.
    pub fn map_from_window(&self, point: Point) -> Point {
        let origin = self.allocation.origin;
        point.offset(-origin.x, -origin.y)
    }

    /// Allocation-relative rectangle to window coordinates.
    pub fn map_rect_to_window(&self, rect: Rect) -> Rect {
        let origin = self.allocation.origin;
        rect.offset(origin.x, origin.y)
    }

    /// Whether a window point lies inside the allocation.
    pub fn contains_window_point(&self, point: Point) -> bool {
        self.allocation.contains(point)
    }
}

impl Object for WidgetBase {
    fn object_id(&self) -> ObjectId {
        self.object.id()
    }
}

impl std::fmt::Debug for WidgetBase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WidgetBase")
            .field("object", &self.object)
            .field("allocation", &self.allocation)
            .field("visible", &self.visible)
            .field("enabled", &self.enabled)
            .field("hovered", &self.hovered)
            .field("dirty", &self.dirty)
            .finish()
    }
}
