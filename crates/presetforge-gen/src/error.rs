//! Error types for the generation backend.

use thiserror::Error;

/// Result type for generation operations.
pub type GenResult<T> = Result<T, GenError>;

/// Errors that can occur during preset generation and packaging.
#[derive(Debug, Error)]
pub enum GenError {
    /// Invalid generation argument.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document serialization error.
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Bank archive error.
    #[error("archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Preset document error.
    #[error("preset error: {0}")]
    Preset(#[from] presetforge_preset::PresetError),
}

impl GenError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }
}
