//! Error types for Trellis.

use std::fmt;

use crate::adjustment::AdjustmentError;
use crate::object::ObjectError;

/// The main error type for Trellis core operations.
#[derive(Debug, Clone, PartialEq)]
pub enum TrellisError {
    /// Object-related error.
    Object(ObjectError),
    /// Adjustment configuration error.
    Adjustment(AdjustmentError),
}

impl fmt::Display for TrellisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Object(err) => write!(f, "Object error: {err}"),
            Self::Adjustment(err) => write!(f, "Adjustment error: {err}"),
        }
    }
}

impl std::error::Error for TrellisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Object(err) => Some(err),
            Self::Adjustment(err) => Some(err),
        }
    }
}

impl From<ObjectError> for TrellisError {
    fn from(err: ObjectError) -> Self {
        Self::Object(err)
    }
}

impl From<AdjustmentError> for TrellisError {
    fn from(err: AdjustmentError) -> Self {
        Self::Adjustment(err)
    }
}

/// A specialized Result type for Trellis core operations.
pub type Result<T> = std::result::Result<T, TrellisError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn adjustment_error_converts_and_keeps_source() {
        let err: TrellisError = AdjustmentError::EmptyRange { lower: 1.0, upper: 1.0 }.into();
        assert!(err.to_string().starts_with("Adjustment error:"));
        assert!(err.source().is_some());
    }
}
