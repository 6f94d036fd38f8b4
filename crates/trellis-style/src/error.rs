//! Errors raised while reading theme stylesheets.
//!
//! Most syntax problems never surface here: the parser skips a malformed
//! rule or declaration and logs it. These variants describe what was skipped,
//! and `Io` is returned when a theme file cannot be read at all.

use std::path::PathBuf;

/// Result alias used throughout the style crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A problem with a theme stylesheet.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The stylesheet is not well formed at the given position (1-based line).
    #[error("theme syntax error at {line}:{column}: {message}")]
    Parse {
        message: String,
        line: u32,
        column: u32,
    },

    /// A selector uses a form themes do not support.
    #[error("unsupported selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },

    /// The theme file could not be read.
    #[error("cannot read theme {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A declaration's value does not fit its property.
    #[error("bad value for `{property}`: {message}")]
    InvalidValue { property: String, message: String },
}

impl Error {
    pub fn parse(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self::Parse {
            message: message.into(),
            line,
            column,
        }
    }

    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_value(property: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            message: message.into(),
        }
    }
}
