//! Temperature column errors.

use su_core::CoreError;
use su_frame::FrameError;
use thiserror::Error;

/// Result type for temperature column operations.
pub type TemperatureResult<T> = Result<T, TemperatureError>;

/// Errors raised while building or operating on temperature columns.
#[derive(Error, Debug)]
pub enum TemperatureError {
    /// Malformed or mismatched input at build time.
    #[error("Construction error: {what}")]
    Construction { what: String },

    /// Positional access or take index outside the valid range.
    #[error("Index out of bounds: index={index}, len={len}")]
    Index { index: i64, len: usize },

    /// Operation against an incompatible column type.
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Text that does not describe a temperature.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TemperatureError {
    pub(crate) fn construction(what: impl Into<String>) -> Self {
        Self::Construction { what: what.into() }
    }
}

impl From<CoreError> for TemperatureError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::IndexOob { index, len, .. } => Self::Index { index, len },
            other => Self::construction(other.to_string()),
        }
    }
}

impl From<TemperatureError> for FrameError {
    fn from(err: TemperatureError) -> Self {
        match err {
            TemperatureError::Index { index, len } => FrameError::IndexOutOfBounds { index, len },
            TemperatureError::TypeMismatch { expected, found } => {
                FrameError::TypeMismatch { expected, found }
            }
            other => FrameError::Extension {
                message: other.to_string(),
            },
        }
    }
}
