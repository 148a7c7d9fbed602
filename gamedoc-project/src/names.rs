//! Identifier helpers for names used in events and expressions.

/// Name used when asked for a safe version of an empty name.
pub const UNNAMED: &str = "Unnamed";

fn is_allowed_in_identifier(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// True if `name` can be used as an identifier: not empty, not starting
/// with a digit, and made only of letters, digits and underscores.
#[must_use]
pub fn is_name_safe(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(first) => is_allowed_in_identifier(first) && chars.all(is_allowed_in_identifier),
    }
}

/// Turns `name` into a safe identifier: a leading digit gets an underscore
/// prefix and every disallowed character becomes an underscore.
#[must_use]
pub fn safe_name(name: &str) -> String {
    if name.is_empty() {
        return UNNAMED.to_string();
    }
    let mut safe = String::with_capacity(name.len() + 1);
    if name.starts_with(|c: char| c.is_ascii_digit()) {
        safe.push('_');
    }
    safe.extend(
        name.chars()
            .map(|c| if is_allowed_in_identifier(c) { c } else { '_' }),
    );
    safe
}
