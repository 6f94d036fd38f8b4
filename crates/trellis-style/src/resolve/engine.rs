//! Main style resolution engine.

use std::path::Path;

use parking_lot::Mutex;

use crate::logging::targets;
use crate::resolve::cache::{PropertyCache, PropertyCacheKey};
use crate::rules::{StylePriority, StyleSheet};
use crate::selector::{SelectorMatcher, Specificity, WidgetMatchContext};
use crate::value::{FromPropertyValue, PropertyValue};

/// Rank of a matching declaration. The highest rank wins.
type Rank = (StylePriority, Specificity, usize, u32);

/// The main style resolution engine.
///
/// The engine holds stylesheets and answers property lookups for a widget.
/// Keys have the form `Class.Property.Path`: the first segment names the
/// widget class the lookup is made for, the rest is the declared property
/// name. A key without a `.` is looked up for the widget's own type.
///
/// Among matching rules that declare the property, the winner is decided by
/// stylesheet priority, then selector specificity, then source order.
///
/// # Example
///
/// ```
/// use trellis_style::{StyleEngine, StylePriority, StyleSheet, WidgetMatchContext};
///
/// let mut engine = StyleEngine::new();
/// engine.add_stylesheet(
///     StyleSheet::from_css("Scale { Slider.Length: 20; }", StylePriority::Theme).unwrap(),
/// );
/// engine.add_stylesheet(
///     StyleSheet::from_css("#volume { Slider.Length: 30; }", StylePriority::Application).unwrap(),
/// );
///
/// let plain = WidgetMatchContext::new("Scale");
/// let named = WidgetMatchContext::new("Scale").with_name("volume");
/// assert_eq!(engine.get::<f32>("Scale.Slider.Length", &plain), Some(20.0));
/// assert_eq!(engine.get::<f32>("Scale.Slider.Length", &named), Some(30.0));
/// ```
pub struct StyleEngine {
    /// All registered stylesheets, in insertion order.
    stylesheets: Vec<StyleSheet>,
    /// Lookup cache, cleared whenever the stylesheets change.
    cache: Mutex<PropertyCache>,
}

impl StyleEngine {
    /// Create an engine with no stylesheets.
    pub fn new() -> Self {
        Self {
            stylesheets: vec![],
            cache: Mutex::new(PropertyCache::new()),
        }
    }

    /// Add a stylesheet.
    pub fn add_stylesheet(&mut self, stylesheet: StyleSheet) {
        tracing::debug!(
            target: targets::ENGINE,
            priority = ?stylesheet.priority,
            rules = stylesheet.len(),
            "added stylesheet"
        );
        self.stylesheets.push(stylesheet);
        self.cache.get_mut().clear();
    }

    /// Remove stylesheets loaded from a specific source file.
    pub fn remove_stylesheet_by_path(&mut self, path: &Path) {
        self.stylesheets.retain(|sheet| !sheet.is_from(path));
        self.cache.get_mut().clear();
    }

    /// Remove every stylesheet with the given priority.
    pub fn clear_priority(&mut self, priority: StylePriority) {
        self.stylesheets.retain(|s| s.priority != priority);
        self.cache.get_mut().clear();
    }

    /// Clear all stylesheets.
    pub fn clear_stylesheets(&mut self) {
        self.stylesheets.clear();
        self.cache.get_mut().clear();
    }

    /// Number of registered stylesheets.
    pub fn stylesheet_count(&self) -> usize {
        self.stylesheets.len()
    }

    /// Look up a property for a widget.
    pub fn property(&self, key: &str, context: &WidgetMatchContext<'_>) -> Option<PropertyValue> {
        let (class, path) = match key.split_once('.') {
            Some((class, path)) if !class.is_empty() && !path.is_empty() => (class, path),
            _ => (context.widget_type, key),
        };
        let context = WidgetMatchContext {
            widget_type: class,
            ..*context
        };

        let cache_key = PropertyCacheKey::new(path, &context);
        if let Some(cached) = self.cache.lock().get(&cache_key) {
            return cached.clone();
        }

        let value = self.resolve(path, &context);
        tracing::trace!(target: targets::ENGINE, key, found = value.is_some(), "resolved property");
        self.cache.lock().insert(cache_key, value.clone());
        value
    }

    /// Look up a property and convert it to `T`.
    ///
    /// Returns `None` if no rule declares the property or if the declared
    /// value has the wrong kind.
    pub fn get<T: FromPropertyValue>(&self, key: &str, context: &WidgetMatchContext<'_>) -> Option<T> {
        let value = self.property(key, context)?;
        let converted = T::from_property_value(&value);
        if converted.is_none() {
            tracing::warn!(target: targets::ENGINE, key, %value, "property has the wrong kind");
        }
        converted
    }

    fn resolve(&self, path: &str, context: &WidgetMatchContext<'_>) -> Option<PropertyValue> {
        let mut best: Option<(Rank, &PropertyValue)> = None;

        for (sheet_index, sheet) in self.stylesheets.iter().enumerate() {
            for rule in &sheet.rules {
                if !SelectorMatcher::matches(&rule.selector, context) {
                    continue;
                }
                let Some(value) = rule.declaration(path) else {
                    continue;
                };

                let rank = (sheet.priority, rule.specificity, sheet_index, rule.order);
                if best.as_ref().is_none_or(|(best_rank, _)| rank >= *best_rank) {
                    best = Some((rank, value));
                }
            }
        }

        best.map(|(_, value)| value.clone())
    }
}

impl Default for StyleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selector::WidgetState;
    use trellis_render::Color;

    fn engine_with(sheets: &[(&str, StylePriority)]) -> StyleEngine {
        let mut engine = StyleEngine::new();
        for (css, priority) in sheets {
            engine.add_stylesheet(StyleSheet::from_css(css, *priority).unwrap());
        }
        engine
    }

    #[test]
    fn specificity_beats_order() {
        let engine = engine_with(&[(
            "Scale:hover { Slider.Color: red; } Scale { Slider.Color: blue; }",
            StylePriority::Theme,
        )]);

        let hovered = WidgetMatchContext::new("Scale").with_state(WidgetState {
            hovered: true,
            ..WidgetState::default()
        });
        assert_eq!(engine.get::<Color>("Scale.Slider.Color", &hovered), Some(Color::RED));
        assert_eq!(
            engine.get::<Color>("Scale.Slider.Color", &WidgetMatchContext::new("Scale")),
            Some(Color::BLUE)
        );
    }

    #[test]
    fn later_rule_wins_on_equal_specificity() {
        let engine = engine_with(&[(
            "Scale { Slider.Width: 1; } Scale { Slider.Width: 2; }",
            StylePriority::Theme,
        )]);
        assert_eq!(
            engine.get::<f32>("Scale.Slider.Width", &WidgetMatchContext::new("Scale")),
            Some(2.0)
        );
    }

    #[test]
    fn priority_beats_specificity() {
        let engine = engine_with(&[
            ("* { Slider.Width: 3; }", StylePriority::Application),
            ("Scale#volume { Slider.Width: 9; }", StylePriority::Theme),
        ]);
        let ctx = WidgetMatchContext::new("Scale").with_name("volume");
        assert_eq!(engine.get::<f32>("Scale.Slider.Width", &ctx), Some(3.0));
    }

    #[test]
    fn class_segment_selects_rules() {
        let engine = engine_with(&[(
            "Scale { Slider.Length: 20; } Scrollbar { Slider.Length: 40; }",
            StylePriority::Theme,
        )]);
        let ctx = WidgetMatchContext::new("Scale");
        assert_eq!(engine.get::<f32>("Scrollbar.Slider.Length", &ctx), Some(40.0));
        assert_eq!(engine.get::<f32>("Slider.Length", &ctx), None);
    }

    #[test]
    fn key_without_class_uses_widget_type() {
        let engine = engine_with(&[("Scale { BorderWidth: 2; }", StylePriority::Theme)]);
        assert_eq!(
            engine.get::<f32>("BorderWidth", &WidgetMatchContext::new("Scale")),
            Some(2.0)
        );
    }

    #[test]
    fn wrong_kind_yields_none() {
        let engine = engine_with(&[("Scale { Slider.Length: red; }", StylePriority::Theme)]);
        assert_eq!(
            engine.get::<f32>("Scale.Slider.Length", &WidgetMatchContext::new("Scale")),
            None
        );
    }

    #[test]
    fn adding_stylesheet_invalidates_cache() {
        let mut engine = engine_with(&[("Scale { Slider.Length: 20; }", StylePriority::Theme)]);
        let ctx = WidgetMatchContext::new("Scale");
        assert_eq!(engine.get::<f32>("Scale.Slider.Length", &ctx), Some(20.0));

        engine.add_stylesheet(
            StyleSheet::from_css("Scale { Slider.Length: 25; }", StylePriority::Application)
                .unwrap(),
        );
        assert_eq!(engine.get::<f32>("Scale.Slider.Length", &ctx), Some(25.0));

        engine.clear_priority(StylePriority::Application);
        assert_eq!(engine.get::<f32>("Scale.Slider.Length", &ctx), Some(20.0));
        assert_eq!(engine.stylesheet_count(), 1);
    }
}
