//! Host-level errors.

use su_core::CoreError;
use thiserror::Error;

/// Result type for host operations.
pub type FrameResult<T> = Result<T, FrameError>;

/// Errors raised by the host or surfaced from an extension array.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FrameError {
    /// Positional access outside the valid range.
    #[error("Index out of bounds: index={index}, len={len}")]
    IndexOutOfBounds { index: i64, len: usize },

    /// Label lookup failed.
    #[error("Label not found: {0}")]
    LabelNotFound(String),

    /// Column lookup failed.
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Alignment needs a unique index.
    #[error("Cannot reindex on an axis with duplicate labels")]
    DuplicateLabels,

    #[error("Length mismatch for {what}: expected {expected}, found {found}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Two columns of incompatible types were combined.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// No dtype of that name is registered.
    #[error("Unknown dtype: {0}")]
    UnknownDtype(String),

    /// Construction failure reported by an extension type.
    #[error("Extension error: {message}")]
    Extension { message: String },
}

impl From<CoreError> for FrameError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IndexOob { index, len, .. } => FrameError::IndexOutOfBounds { index, len },
            CoreError::LengthMismatch { what, left, right } => FrameError::LengthMismatch {
                what,
                expected: left,
                found: right,
            },
            other => FrameError::Extension {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FrameError::TypeMismatch {
            expected: "celsius".into(),
            found: "float64".into(),
        };
        assert!(err.to_string().contains("celsius"));
        assert!(err.to_string().contains("float64"));
    }

    #[test]
    fn core_index_error_maps_to_bounds() {
        let core = CoreError::IndexOob {
            what: "take",
            index: 7,
            len: 3,
        };
        assert_eq!(
            FrameError::from(core),
            FrameError::IndexOutOfBounds { index: 7, len: 3 }
        );
    }
}
