//! Change notification.
//!
//! A [`Signal`] holds any number of slots and calls each of them, in the order
//! they were connected, every time it is emitted. Slots run on the emitting
//! thread before `emit` returns.
//!
//! ```
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicU32, Ordering};
//! use trellis_core::Signal;
//!
//! let value_changed = Signal::<f32>::new();
//! let seen = Arc::new(AtomicU32::new(0));
//!
//! let counter = Arc::clone(&seen);
//! let id = value_changed.connect(move |_| {
//!     counter.fetch_add(1, Ordering::Relaxed);
//! });
//!
//! value_changed.emit(0.5);
//! value_changed.disconnect(id);
//! value_changed.emit(0.75);
//! assert_eq!(seen.load(Ordering::Relaxed), 1);
//! ```

use std::sync::Arc;

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Returned by [`Signal::connect`]; pass it to [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;

/// A list of callbacks taking `&Args`.
///
/// `emit` snapshots the slot list before calling anything, so a slot may
/// connect to or disconnect from the signal that is calling it. Changes take
/// effect from the next emission.
pub struct Signal<Args> {
    slots: Mutex<SlotMap<ConnectionId, Slot<Args>>>,
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            slots: Mutex::new(SlotMap::with_key()),
        }
    }

    pub fn connect(&self, slot: impl Fn(&Args) + Send + Sync + 'static) -> ConnectionId {
        self.slots.lock().insert(Arc::new(slot))
    }

    /// Connect `slot` until the returned guard is dropped.
    pub fn connect_scoped(
        &self,
        slot: impl Fn(&Args) + Send + Sync + 'static,
    ) -> ConnectionGuard<'_, Args> {
        ConnectionGuard {
            id: self.connect(slot),
            signal: self,
        }
    }

    /// Returns `false` if `id` was already disconnected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.slots.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    pub fn emit(&self, args: Args) {
        let snapshot: Vec<Slot<Args>> = self.slots.lock().values().map(Arc::clone).collect();
        if snapshot.is_empty() {
            return;
        }
        tracing::trace!(target: targets::SIGNAL, slots = snapshot.len(), "emit");
        snapshot.iter().for_each(|slot| slot(&args));
    }
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

/// Disconnects its slot on drop. See [`Signal::connect_scoped`].
#[must_use = "the slot is disconnected as soon as the guard is dropped"]
pub struct ConnectionGuard<'a, Args: 'static> {
    signal: &'a Signal<Args>,
    id: ConnectionId,
}

impl<Args: 'static> ConnectionGuard<'_, Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args: 'static> Drop for ConnectionGuard<'_, Args> {
    fn drop(&mut self) {
        self.signal.disconnect(self.id);
    }
}
