use gamedoc_serial::SerialError;
use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, ProjectError>;

/// Errors raised when reading or writing project files.
///
/// Loading a parsed tree never fails; problems found in the document are
/// reported as [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serial(#[from] SerialError),
}
