//! Object identity.
//!
//! Every widget owns an [`ObjectBase`], which gives it a stable [`ObjectId`]
//! and an entry in the process-wide [`ObjectRegistry`]. The entry holds the
//! object's name, matched by `#name` theme selectors, and its Rust type name
//! for log output. Dropping the base removes the entry.

use std::any::Any;
use std::fmt;
use std::sync::OnceLock;

use parking_lot::RwLock;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Handle to a registered object. Stale once the object is dropped.
    pub struct ObjectId;
}

/// Looking up an object that is no longer registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectError {
    Unregistered(ObjectId),
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unregistered(id) => write!(f, "object {id:?} is not registered"),
        }
    }
}

impl std::error::Error for ObjectError {}

pub type ObjectResult<T> = std::result::Result<T, ObjectError>;

struct Entry {
    name: String,
    type_name: &'static str,
}

/// Names and type names of live objects, keyed by [`ObjectId`].
#[derive(Default)]
pub struct ObjectRegistry {
    entries: RwLock<SlotMap<ObjectId, Entry>>,
}

impl ObjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an unnamed object of type `T`.
    pub fn register<T: Object>(&self) -> ObjectId {
        let type_name = std::any::type_name::<T>();
        let id = self.entries.write().insert(Entry {
            name: String::new(),
            type_name,
        });
        tracing::trace!(target: targets::OBJECT, ?id, type_name, "object registered");
        id
    }

    pub fn unregister(&self, id: ObjectId) -> ObjectResult<()> {
        let entry = self
            .entries
            .write()
            .remove(id)
            .ok_or(ObjectError::Unregistered(id))?;
        tracing::trace!(
            target: targets::OBJECT,
            ?id,
            name = %entry.name,
            "object unregistered"
        );
        Ok(())
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.entries.read().contains_key(id)
    }

    /// The object's name; empty until one is assigned.
    pub fn name(&self, id: ObjectId) -> ObjectResult<String> {
        self.entries
            .read()
            .get(id)
            .map(|entry| entry.name.clone())
            .ok_or(ObjectError::Unregistered(id))
    }

    pub fn rename(&self, id: ObjectId, name: impl Into<String>) -> ObjectResult<()> {
        let mut entries = self.entries.write();
        let entry = entries.get_mut(id).ok_or(ObjectError::Unregistered(id))?;
        entry.name = name.into();
        Ok(())
    }

    /// Full path of the object's Rust type.
    pub fn type_name(&self, id: ObjectId) -> ObjectResult<&'static str> {
        self.entries
            .read()
            .get(id)
            .map(|entry| entry.type_name)
            .ok_or(ObjectError::Unregistered(id))
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// The registry shared by every [`ObjectBase`], created on first use.
pub fn global_registry() -> &'static ObjectRegistry {
    static GLOBAL: OnceLock<ObjectRegistry> = OnceLock::new();
    GLOBAL.get_or_init(ObjectRegistry::new)
}

/// Anything with an [`ObjectId`].
///
/// ```
/// use trellis_core::{Object, ObjectBase, ObjectId};
///
/// struct Knob {
///     base: ObjectBase,
/// }
///
/// impl Object for Knob {
///     fn object_id(&self) -> ObjectId {
///         self.base.id()
///     }
/// }
///
/// let knob = Knob { base: ObjectBase::new::<Knob>() };
/// knob.base.set_name("gain");
/// assert_eq!(knob.base.name(), "gain");
/// ```
pub trait Object: Any + Send + Sync {
    fn object_id(&self) -> ObjectId;
}

/// Registration held by an object for as long as it lives.
pub struct ObjectBase {
    id: ObjectId,
}

impl ObjectBase {
    pub fn new<T: Object>() -> Self {
        Self {
            id: global_registry().register::<T>(),
        }
    }

    pub fn id(&self) -> ObjectId {
        self.id
    }

    pub fn name(&self) -> String {
        global_registry().name(self.id).unwrap_or_default()
    }

    pub fn set_name(&self, name: impl Into<String>) {
        // Only fails after drop, which `&self` rules out.
        let _ = global_registry().rename(self.id, name);
    }

    pub fn type_name(&self) -> &'static str {
        global_registry().type_name(self.id).unwrap_or_default()
    }
}

impl Drop for ObjectBase {
    fn drop(&mut self) {
        let _ = global_registry().unregister(self.id);
    }
}

impl fmt::Debug for ObjectBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectBase").field(&self.id).finish()
    }
}

static_assertions::assert_impl_all!(ObjectBase: Send, Sync);
static_assertions::assert_impl_all!(ObjectRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    struct Knob {
        base: ObjectBase,
    }

    impl Object for Knob {
        fn object_id(&self) -> ObjectId {
            self.base.id()
        }
    }

    fn knob() -> Knob {
        Knob {
            base: ObjectBase::new::<Knob>(),
        }
    }

    #[test]
    fn new_objects_are_unnamed() {
        let knob = knob();
        assert!(global_registry().contains(knob.object_id()));
        assert_eq!(knob.base.name(), "");
        assert!(knob.base.type_name().ends_with("::Knob"));
    }

    #[test]
    fn rename_is_visible_through_the_base() {
        let knob = knob();
        knob.base.set_name("gain");
        assert_eq!(global_registry().name(knob.object_id()).unwrap(), "gain");
        assert_eq!(knob.base.name(), "gain");
    }

    #[test]
    fn dropped_objects_leave_the_registry() {
        let knob = knob();
        let id = knob.object_id();
        drop(knob);

        assert!(!global_registry().contains(id));
        assert_eq!(global_registry().name(id), Err(ObjectError::Unregistered(id)));
    }

    #[test]
    fn private_registry_rejects_double_unregister() {
        let registry = ObjectRegistry::new();
        let id = registry.register::<Knob>();
        assert_eq!(registry.len(), 1);
        registry.unregister(id).unwrap();
        assert!(registry.is_empty());
        assert_eq!(registry.unregister(id), Err(ObjectError::Unregistered(id)));
    }
}
