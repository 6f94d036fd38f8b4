//! How specific a selector is.

use std::fmt;

use super::{Selector, TypeSelector};

/// Selector weight, compared field by field in declaration order: one name
/// outweighs any number of states, and one state any number of type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Specificity {
    /// `#name` parts.
    pub names: u32,
    /// `:state` parts.
    pub states: u32,
    /// Widget type names. `*` does not count.
    pub types: u32,
}

impl Specificity {
    pub const ZERO: Self = Self::new(0, 0, 0);

    pub const fn new(names: u32, states: u32, types: u32) -> Self {
        Self {
            names,
            states,
            types,
        }
    }

    pub fn of_selector(selector: &Selector) -> Self {
        let types = match &selector.type_selector {
            Some(TypeSelector::Type(_)) => 1,
            Some(TypeSelector::Universal) | None => 0,
        };
        Self::new(
            u32::from(selector.id.is_some()),
            u32::try_from(selector.pseudo_classes.len()).unwrap_or(u32::MAX),
            types,
        )
    }
}

impl fmt::Display for Specificity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.names, self.states, self.types)
    }
}
