//! Theme stylesheets.

use std::path::{Path, PathBuf};

use crate::logging::targets;
use crate::rules::{Declaration, StyleRule};
use crate::selector::Selector;
use crate::{Error, Result};

/// Which layer a stylesheet belongs to.
///
/// Any rule in an `Application` sheet beats every `Theme` rule, whatever the
/// selectors' specificity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StylePriority {
    /// Built-in engine defaults.
    Theme,
    /// Themes supplied by the user or the application.
    Application,
}

/// The parsed rules of one theme, plus where they came from.
#[derive(Debug, Clone)]
pub struct StyleSheet {
    /// Rules in source order.
    pub rules: Vec<StyleRule>,
    pub priority: StylePriority,
    /// Set when the sheet was read with [`StyleSheet::from_file`].
    pub source_path: Option<PathBuf>,
}

impl StyleSheet {
    /// An empty sheet.
    pub fn new(priority: StylePriority) -> Self {
        Self {
            rules: Vec::new(),
            priority,
            source_path: None,
        }
    }

    /// Parse theme text. Malformed rules are skipped, not reported.
    pub fn from_css(css: &str, priority: StylePriority) -> Result<Self> {
        Ok(Self {
            rules: crate::parser::parse_css(css)?,
            ..Self::new(priority)
        })
    }

    /// Read and parse a theme file.
    pub fn from_file(path: impl AsRef<Path>, priority: StylePriority) -> Result<Self> {
        let path = path.as_ref();
        let css = std::fs::read_to_string(path).map_err(|err| Error::io(path, err))?;

        let mut sheet = Self::from_css(&css, priority)?;
        sheet.source_path = Some(path.to_path_buf());
        tracing::debug!(
            target: targets::PARSER,
            path = %path.display(),
            rules = sheet.len(),
            "read theme file"
        );
        Ok(sheet)
    }

    /// Whether this sheet was read from `path`.
    pub fn is_from(&self, path: &Path) -> bool {
        self.source_path.as_deref() == Some(path)
    }

    /// Append a rule after every existing one.
    pub fn add_rule(&mut self, selector: Selector, declarations: Vec<Declaration>) {
        let order = self.rules.last().map_or(0, |rule| rule.order + 1);
        self.rules.push(StyleRule::new(selector, declarations, order));
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::PropertyValue;

    #[test]
    fn user_layer_outranks_theme_layer() {
        assert!(StylePriority::Application > StylePriority::Theme);
    }

    #[test]
    fn rules_are_numbered_in_source_order() {
        let mut sheet = StyleSheet::from_css("Scale {} #volume {}", StylePriority::Theme).unwrap();
        sheet.add_rule(
            Selector::type_selector("Scale"),
            vec![Declaration::new("Slider.Length", PropertyValue::Number(20.0))],
        );

        let orders: Vec<u32> = sheet.iter().map(|rule| rule.order).collect();
        assert_eq!(orders, vec![0, 1, 2]);
        assert!(!sheet.is_from(Path::new("theme.css")));
    }

    #[test]
    fn empty_sheet_has_no_source() {
        let sheet = StyleSheet::new(StylePriority::Application);
        assert!(sheet.is_empty());
        assert!(sheet.source_path.is_none());
    }
}
