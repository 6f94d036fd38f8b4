//! Error types for the widget layer.

use std::path::PathBuf;

use trellis_core::{AdjustmentError, ObjectError, TrellisError};

/// Errors produced while building widgets or configuring an engine.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// An object or adjustment error from the core crate.
    #[error(transparent)]
    Core(#[from] TrellisError),

    /// A theme stylesheet could not be read or parsed.
    #[error("theme error: {0}")]
    Style(#[from] trellis_style::Error),

    /// A render target could not be created.
    #[error("render error: {0}")]
    Render(#[from] trellis_render::RenderError),

    /// A theme file does not exist.
    #[error("theme file not found: {}", path.display())]
    ThemeNotFound {
        /// The path that was looked up.
        path: PathBuf,
    },
}

impl From<AdjustmentError> for WidgetError {
    fn from(err: AdjustmentError) -> Self {
        Self::Core(err.into())
    }
}

impl From<ObjectError> for WidgetError {
    fn from(err: ObjectError) -> Self {
        Self::Core(err.into())
    }
}

/// A specialized Result type for widget operations.
pub type WidgetResult<T> = std::result::Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustment_errors_wrap_through_core() {
        let err: WidgetError = AdjustmentError::EmptyRange { lower: 5.0, upper: 5.0 }.into();
        assert!(matches!(err, WidgetError::Core(TrellisError::Adjustment(_))));
    }

    #[test]
    fn missing_theme_names_path() {
        let err = WidgetError::ThemeNotFound {
            path: PathBuf::from("/nowhere/theme.css"),
        };
        assert!(err.to_string().contains("/nowhere/theme.css"));
    }
}
