//! Property values declared in stylesheets.
//!
//! # Example
//!
//! ```
//! use trellis_style::{FromPropertyValue, PropertyValue};
//! use trellis_render::Color;
//!
//! let length = PropertyValue::Number(20.0);
//! assert_eq!(f32::from_property_value(&length), Some(20.0));
//!
//! // Identifiers double as named colours.
//! let named = PropertyValue::Ident("white".into());
//! assert_eq!(Color::from_property_value(&named), Some(Color::WHITE));
//! ```

use std::fmt;

use trellis_render::Color;

/// A single declared value.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// A number, with or without a `px` unit.
    Number(f32),
    /// A colour given as `#rrggbb`, `#rrggbbaa`, `rgb()` or `rgba()`.
    Color(Color),
    /// A bare identifier, e.g. `horizontal` or `white`.
    Ident(String),
    /// A quoted string.
    Str(String),
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Color(c) => write!(f, "rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
            Self::Ident(s) => f.write_str(s),
            Self::Str(s) => write!(f, "\"{s}\""),
        }
    }
}

/// Conversion from a declared value to a typed property.
///
/// Returns `None` when the declared value has the wrong kind, so callers can
/// fall back to a default.
pub trait FromPropertyValue: Sized {
    /// Convert the value, or `None` if it has the wrong kind.
    fn from_property_value(value: &PropertyValue) -> Option<Self>;
}

impl FromPropertyValue for f32 {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromPropertyValue for Color {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Color(c) => Some(*c),
            PropertyValue::Ident(name) => Color::from_name(name),
            _ => None,
        }
    }
}

impl FromPropertyValue for String {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Ident(s) | PropertyValue::Str(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromPropertyValue for PropertyValue {
    fn from_property_value(value: &PropertyValue) -> Option<Self> {
        Some(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_does_not_convert_to_color() {
        assert_eq!(Color::from_property_value(&PropertyValue::Number(1.0)), None);
    }

    #[test]
    fn unknown_ident_is_not_a_color() {
        let value = PropertyValue::Ident("horizontal".into());
        assert_eq!(Color::from_property_value(&value), None);
        assert_eq!(String::from_property_value(&value), Some("horizontal".into()));
    }

    #[test]
    fn display_round_trips_simple_values() {
        assert_eq!(PropertyValue::Number(2.5).to_string(), "2.5");
        assert_eq!(PropertyValue::Str("a b".into()).to_string(), "\"a b\"");
    }
}
