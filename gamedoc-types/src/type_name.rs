//! Fully qualified type identifiers.
//!
//! Types declared by extensions are referenced as `Extension::Type`. Native
//! types (`Sprite`, `TextObject::Text` from built-in extensions) use the same
//! form, and bare names without a separator belong to no extension.

/// Separator between the extension name and the type name.
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Builds the full type of `type_name` declared by `extension`.
#[must_use]
pub fn full_type(extension: &str, type_name: &str) -> String {
    format!("{extension}{NAMESPACE_SEPARATOR}{type_name}")
}

/// Returns the extension part of a full type, or `""` for bare names.
#[must_use]
pub fn extension_of(full_type: &str) -> &str {
    full_type
        .split_once(NAMESPACE_SEPARATOR)
        .map(|(extension, _)| extension)
        .unwrap_or("")
}
