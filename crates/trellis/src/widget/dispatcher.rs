//! Event dispatching for widgets.
//!
//! The dispatcher works with any widget storage: implement [`WidgetAccess`]
//! for it and hand it to [`EventDispatcher`].
//!
//! ```ignore
//! use trellis::widget::{EventDispatcher, WidgetAccess, WidgetEvent};
//!
//! struct Storage {
//!     widgets: HashMap<ObjectId, Box<dyn Widget>>,
//! }
//!
//! impl WidgetAccess for Storage {
//!     fn get_widget(&self, id: ObjectId) -> Option<&dyn Widget> {
//!         self.widgets.get(&id).map(|w| w.as_ref())
//!     }
//!
//!     fn get_widget_mut(&mut self, id: ObjectId) -> Option<&mut dyn Widget> {
//!         self.widgets.get_mut(&id).map(|w| w.as_mut())
//!     }
//! }
//!
//! let result = EventDispatcher::send_event(&mut storage, scale_id, &mut event);
//! ```

use trellis_core::ObjectId;

use crate::logging::targets;

use super::Widget;
use super::events::WidgetEvent;

/// Result of dispatching an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchResult {
    /// At least one widget consumed the event.
    Accepted,
    /// No widget consumed the event.
    Ignored,
    /// A target widget was not found.
    WidgetNotFound,
}

impl DispatchResult {
    /// Check if the event was handled.
    pub fn was_handled(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Trait for accessing widgets by their ObjectId.
pub trait WidgetAccess {
    /// Get an immutable reference to a widget by its ID.
    fn get_widget(&self, id: ObjectId) -> Option<&dyn Widget>;

    /// Get a mutable reference to a widget by its ID.
    fn get_widget_mut(&mut self, id: ObjectId) -> Option<&mut dyn Widget>;
}

/// Event dispatcher for the widget system.
pub struct EventDispatcher;

impl EventDispatcher {
    /// Deliver an event to a single widget.
    ///
    /// Disabled widgets receive only releases, so a press that started
    /// before the widget was disabled still gets its matching release.
    pub fn send_event<S: WidgetAccess + ?Sized>(
        storage: &mut S,
        target_id: ObjectId,
        event: &mut WidgetEvent,
    ) -> DispatchResult {
        let Some(widget) = storage.get_widget_mut(target_id) else {
            tracing::debug!(target: targets::DISPATCH, ?target_id, "event target not found");
            return DispatchResult::WidgetNotFound;
        };

        if !widget.is_enabled() && !matches!(event, WidgetEvent::MouseRelease(_)) {
            return DispatchResult::Ignored;
        }

        if widget.event(event) || event.is_accepted() {
            DispatchResult::Accepted
        } else {
            DispatchResult::Ignored
        }
    }

    /// Deliver a pointer event to a list of widgets.
    ///
    /// Presses and wheel events go to each widget in order until one consumes
    /// them. Moves and releases are broadcast to every listed widget, and
    /// each widget receives a fresh copy of the event. Missing widgets are
    /// skipped; if none of the ids resolve the result is `WidgetNotFound`.
    pub fn dispatch_pointer<S: WidgetAccess + ?Sized>(
        storage: &mut S,
        target_ids: &[ObjectId],
        event: &mut WidgetEvent,
    ) -> DispatchResult {
        let broadcast = event.is_broadcast();
        let template = *event;
        let mut found = false;
        let mut handled = false;

        for &id in target_ids {
            let mut delivered = if broadcast { template } else { *event };
            match Self::send_event(storage, id, &mut delivered) {
                DispatchResult::WidgetNotFound => continue,
                DispatchResult::Accepted => {
                    found = true;
                    handled = true;
                    *event = delivered;
                    if !broadcast {
                        break;
                    }
                }
                DispatchResult::Ignored => found = true,
            }
        }

        tracing::trace!(
            target: targets::DISPATCH,
            broadcast,
            handled,
            targets = target_ids.len(),
            "dispatched pointer event"
        );

        match (found, handled) {
            (_, true) => DispatchResult::Accepted,
            (true, false) => DispatchResult::Ignored,
            (false, false) => DispatchResult::WidgetNotFound,
        }
    }
}
