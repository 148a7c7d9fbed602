//! Error types for the attribute tree.

use thiserror::Error;

/// Result type for tree parsing and printing.
pub type SerialResult<T> = Result<T, SerialError>;

/// Errors raised when converting text to or from a tree.
#[derive(Debug, Error)]
pub enum SerialError {
    /// Malformed JSON text.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
