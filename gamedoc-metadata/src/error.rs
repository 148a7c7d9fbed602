use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, MetadataError>;

/// Errors raised while loading a registry.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read registry: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse registry: {0}")]
    Toml(#[from] toml::de::Error),
}
