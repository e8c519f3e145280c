//! Error types for the preset document model.

use thiserror::Error;

/// Result type for preset document operations.
pub type PresetResult<T> = Result<T, PresetError>;

/// Errors that can occur while reading, writing, or sanitizing preset documents.
#[derive(Debug, Error)]
pub enum PresetError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Document failed to parse or serialize.
    #[error("malformed preset document: {0}")]
    Json(#[from] serde_json::Error),
}
