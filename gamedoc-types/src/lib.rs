//! Core type definitions for gamedoc project documents.
//!
//! This crate defines the small, dependency-free vocabulary shared by every
//! other crate in the workspace:
//! - [`DocumentVersion`]: the 4-part version stamped into saved projects
//! - [`full_type`] and [`extension_of`]: fully qualified `Extension::Type` names
//!
//! Nothing here knows about the attribute tree or the project layout.

mod type_name;
mod version;

pub use type_name::{NAMESPACE_SEPARATOR, extension_of, full_type};
pub use version::DocumentVersion;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, TypesError>;

/// Errors that can occur when parsing core types from text.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("invalid version: {0}")]
    InvalidVersion(String),
}
