//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur when setting up a render target.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    /// Invalid target dimensions (zero width or height).
    #[error("invalid target dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The scale factor is not a positive finite number.
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(f32),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
