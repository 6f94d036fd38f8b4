//! Memoised property lookups.

use std::collections::HashMap;

use crate::selector::{WidgetMatchContext, WidgetState};
use crate::value::PropertyValue;

const DEFAULT_CAPACITY: usize = 1024;

/// A property path plus everything about the widget that selectors can see.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyCacheKey {
    path: String,
    widget_type: String,
    widget_name: Option<String>,
    state: WidgetState,
}

impl PropertyCacheKey {
    pub fn new(path: &str, context: &WidgetMatchContext<'_>) -> Self {
        Self {
            path: path.to_owned(),
            widget_type: context.widget_type.to_owned(),
            widget_name: context.widget_name.map(str::to_owned),
            state: context.state,
        }
    }
}

/// Resolved values by key. Misses are cached too, as `None`.
///
/// Holds at most `capacity` entries; inserting past that starts over from
/// empty. A theme uses a handful of paths, so refills are cheap and rare.
#[derive(Debug)]
pub struct PropertyCache {
    entries: HashMap<PropertyCacheKey, Option<PropertyValue>>,
    capacity: usize,
}

impl PropertyCache {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            capacity: capacity.max(1),
        }
    }

    /// `None` when the key has not been resolved since the last clear.
    pub fn get(&self, key: &PropertyCacheKey) -> Option<&Option<PropertyValue>> {
        self.entries.get(key)
    }

    pub fn insert(&mut self, key: PropertyCacheKey, value: Option<PropertyValue>) {
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            self.entries.clear();
        }
        self.entries.insert(key, value);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PropertyCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(path: &str) -> PropertyCacheKey {
        PropertyCacheKey::new(path, &WidgetMatchContext::new("Scale"))
    }

    #[test]
    fn remembers_hits_and_misses() {
        let mut cache = PropertyCache::new();
        assert!(cache.get(&key("Scale.Slider.Length")).is_none());

        cache.insert(key("Scale.Slider.Length"), Some(PropertyValue::Number(20.0)));
        cache.insert(key("Scale.Missing"), None);
        assert_eq!(
            cache.get(&key("Scale.Slider.Length")),
            Some(&Some(PropertyValue::Number(20.0)))
        );
        assert_eq!(cache.get(&key("Scale.Missing")), Some(&None));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn widget_state_distinguishes_keys() {
        let normal = WidgetMatchContext::new("Scale");
        let hovered = normal.with_state(WidgetState {
            hovered: true,
            ..WidgetState::default()
        });
        assert_ne!(
            PropertyCacheKey::new("Scale.Slider.Color", &normal),
            PropertyCacheKey::new("Scale.Slider.Color", &hovered)
        );
    }

    #[test]
    fn overflowing_starts_over() {
        let mut cache = PropertyCache::with_capacity(4);
        for i in 0..4 {
            cache.insert(key(&format!("Scale.K{i}")), None);
        }
        cache.insert(key("Scale.K0"), Some(PropertyValue::Number(1.0)));
        assert_eq!(cache.len(), 4);

        cache.insert(key("Scale.K4"), None);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(&key("Scale.K4")).is_some());
    }
}
