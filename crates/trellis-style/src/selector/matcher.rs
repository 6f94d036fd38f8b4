//! Selector matching algorithm.

use super::{PseudoClass, Selector, TypeSelector};

/// The widget a selector is matched against.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetMatchContext<'a> {
    /// Widget type name (e.g., "Scale").
    pub widget_type: &'a str,
    /// Widget name (for `#name` selectors).
    pub widget_name: Option<&'a str>,
    /// Widget state flags.
    pub state: WidgetState,
}

impl<'a> WidgetMatchContext<'a> {
    /// Create a context for a widget type in the default state.
    pub fn new(widget_type: &'a str) -> Self {
        Self {
            widget_type,
            widget_name: None,
            state: WidgetState::default(),
        }
    }

    /// Set the widget name. Empty names are treated as unnamed.
    pub fn with_name(mut self, name: &'a str) -> Self {
        self.widget_name = (!name.is_empty()).then_some(name);
        self
    }

    /// Set the widget state.
    pub fn with_state(mut self, state: WidgetState) -> Self {
        self.state = state;
        self
    }
}

/// Widget interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetState {
    /// Whether the mouse is hovering over the widget.
    pub hovered: bool,
    /// Whether the widget is being pressed or dragged.
    pub pressed: bool,
    /// Whether the widget is enabled for interaction.
    pub enabled: bool,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self {
            hovered: false,
            pressed: false,
            enabled: true,
        }
    }
}

/// Selector matching engine.
pub struct SelectorMatcher;

impl SelectorMatcher {
    /// Check if a selector matches the widget.
    pub fn matches(selector: &Selector, context: &WidgetMatchContext<'_>) -> bool {
        if selector.is_empty() {
            return false;
        }

        if let Some(TypeSelector::Type(name)) = &selector.type_selector
            && name != context.widget_type
        {
            return false;
        }

        if let Some(id) = &selector.id {
            match context.widget_name {
                Some(name) if name == id => {}
                _ => return false,
            }
        }

        selector
            .pseudo_classes
            .iter()
            .all(|pseudo| Self::pseudo_matches(*pseudo, &context.state))
    }

    /// Check if a pseudo-class matches the widget state.
    fn pseudo_matches(pseudo: PseudoClass, state: &WidgetState) -> bool {
        match pseudo {
            PseudoClass::Hover => state.hovered,
            PseudoClass::Pressed => state.pressed,
            PseudoClass::Disabled => !state.enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_and_universal_selectors() {
        let ctx = WidgetMatchContext::new("Scale");
        assert!(SelectorMatcher::matches(&Selector::type_selector("Scale"), &ctx));
        assert!(!SelectorMatcher::matches(&Selector::type_selector("Button"), &ctx));
        assert!(SelectorMatcher::matches(&Selector::universal(), &ctx));
    }

    #[test]
    fn name_selector_requires_matching_name() {
        let selector = Selector::type_selector("Scale").with_id("volume");
        let unnamed = WidgetMatchContext::new("Scale").with_name("");
        let named = WidgetMatchContext::new("Scale").with_name("volume");
        assert!(!SelectorMatcher::matches(&selector, &unnamed));
        assert!(SelectorMatcher::matches(&selector, &named));
    }

    #[test]
    fn pseudo_classes_follow_state() {
        let hover = Selector::type_selector("Scale").with_pseudo(PseudoClass::Hover);
        let disabled = Selector::universal().with_pseudo(PseudoClass::Disabled);

        let mut state = WidgetState::default();
        let ctx = WidgetMatchContext::new("Scale").with_state(state);
        assert!(!SelectorMatcher::matches(&hover, &ctx));
        assert!(!SelectorMatcher::matches(&disabled, &ctx));

        state.hovered = true;
        state.enabled = false;
        let ctx = ctx.with_state(state);
        assert!(SelectorMatcher::matches(&hover, &ctx));
        assert!(SelectorMatcher::matches(&disabled, &ctx));
    }

    #[test]
    fn empty_selector_never_matches() {
        assert!(!SelectorMatcher::matches(
            &Selector::default(),
            &WidgetMatchContext::new("Scale")
        ));
    }
}
