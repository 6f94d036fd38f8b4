//! Theme rules and their declarations.

use crate::selector::{Selector, Specificity};
use crate::value::PropertyValue;

/// One `Name: value` pair inside a rule block.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// Dotted property path, e.g. `Slider.Length`.
    pub name: String,
    /// The declared value.
    pub value: PropertyValue,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A selector and the declarations it applies. Rules of equal specificity
/// from the same sheet are ranked by `order`.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    /// The selector for matching widgets.
    pub selector: Selector,
    /// The declarations, in source order.
    pub declarations: Vec<Declaration>,
    pub specificity: Specificity,
    /// Position in the owning sheet, counting from 0.
    pub order: u32,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(selector: Selector, declarations: Vec<Declaration>, order: u32) -> Self {
        let specificity = Specificity::of_selector(&selector);
        Self {
            selector,
            declarations,
            specificity,
            order,
        }
    }

    /// Create a rule with a type selector.
    pub fn for_type(
        widget_type: impl Into<String>,
        declarations: Vec<Declaration>,
        order: u32,
    ) -> Self {
        Self::new(Selector::type_selector(widget_type), declarations, order)
    }

    /// The value declared for `name`. A later declaration in the same block
    /// overrides an earlier one.
    pub fn declaration(&self, name: &str) -> Option<&PropertyValue> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.name == name)
            .map(|d| &d.value)
    }
}
