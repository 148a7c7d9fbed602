//! Attribute tree for gamedoc documents.
//!
//! Project files are JSON, but the loader never looks at JSON directly. It
//! reads an [`Element`] tree: named, ordered children, optional leaf values,
//! and an array flag. Reads are total: asking for a missing child returns a
//! shared empty element, and missing attributes fall back to the caller's
//! default. This is what lets old documents with absent fields load without
//! special-casing every access.
//!
//! Renamed fields are looked up by their current name first, then by their
//! legacy alias (see the `*_aliased` accessors and [`Element::child_or`]).

mod element;
mod error;
mod json;
mod value;

pub use element::Element;
pub use error::{SerialError, SerialResult};
pub use value::Value;
