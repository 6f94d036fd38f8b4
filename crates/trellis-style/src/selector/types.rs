//! Selector syntax tree.

use std::fmt;

/// One compound selector: an optional type, an optional `#name`, and any
/// number of `:state` parts, such as `Scale#volume:hover`.
///
/// All present parts must match. The parser never yields an empty selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Selector {
    pub type_selector: Option<TypeSelector>,
    /// Compared against the widget's object name.
    pub id: Option<String>,
    pub pseudo_classes: Vec<PseudoClass>,
}

impl Selector {
    fn with_type(type_selector: TypeSelector) -> Self {
        Self {
            type_selector: Some(type_selector),
            ..Self::default()
        }
    }

    /// `Scale`, `Window` and so on.
    pub fn type_selector(widget_type: impl Into<String>) -> Self {
        Self::with_type(TypeSelector::Type(widget_type.into()))
    }

    /// `*`
    pub fn universal() -> Self {
        Self::with_type(TypeSelector::Universal)
    }

    /// `#name` on its own.
    pub fn id(id: impl Into<String>) -> Self {
        Self::default().with_id(id)
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self
        }
    }

    pub fn with_pseudo(mut self, pseudo: PseudoClass) -> Self {
        self.pseudo_classes.push(pseudo);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(type_selector) = &self.type_selector {
            write!(f, "{type_selector}")?;
        }
        if let Some(id) = &self.id {
            write!(f, "#{id}")?;
        }
        self.pseudo_classes
            .iter()
            .try_for_each(|pseudo| write!(f, ":{pseudo}"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSelector {
    /// `*`
    Universal,
    /// A widget's style class, e.g. `Scale`.
    Type(String),
}

impl fmt::Display for TypeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Universal => f.write_str("*"),
            Self::Type(name) => f.write_str(name),
        }
    }
}

/// A widget state a rule can be limited to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PseudoClass {
    Hover,
    /// Held down, including while the handle is dragged.
    Pressed,
    Disabled,
}

impl PseudoClass {
    const NAMES: [(&'static str, Self); 4] = [
        ("hover", Self::Hover),
        ("pressed", Self::Pressed),
        ("active", Self::Pressed),
        ("disabled", Self::Disabled),
    ];

    /// Case-insensitive; `active` is an alias for `pressed`.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| name.eq_ignore_ascii_case(candidate))
            .map(|&(_, pseudo)| pseudo)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Pressed => "pressed",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for PseudoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_back_to_source_form() {
        let selector = Selector::type_selector("Scale")
            .with_id("volume")
            .with_pseudo(PseudoClass::Hover);
        assert_eq!(selector.to_string(), "Scale#volume:hover");
        assert_eq!(Selector::universal().to_string(), "*");
        assert_eq!(Selector::id("gain").to_string(), "#gain");
    }

    #[test]
    fn state_names() {
        assert_eq!(PseudoClass::from_name("Active"), Some(PseudoClass::Pressed));
        assert_eq!(PseudoClass::from_name("DISABLED"), Some(PseudoClass::Disabled));
        assert_eq!(PseudoClass::from_name("focus"), None);
    }

    #[test]
    fn only_the_default_selector_is_empty() {
        assert!(Selector::default().is_empty());
        assert!(!Selector::universal().is_empty());
        assert!(!Selector::default().with_pseudo(PseudoClass::Hover).is_empty());
    }
}
