//! Metadata registry for gamedoc projects.
//!
//! A [`Platform`] describes the object and behavior types a runtime provides:
//! which behaviors each object type gets by default, and how to build a
//! fresh behavior of a given type. Platforms live in a [`PlatformRegistry`]
//! owned outside of any project; projects refer to them by [`PlatformId`].
//!
//! Registries are normally loaded from a `registry.toml` file:
//!
//! ```toml
//! [[platform]]
//! name = "GDevelop JS platform"
//!
//! [[platform.object]]
//! type = "Sprite"
//! default-behaviors = ["EffectCapability::EffectBehavior"]
//!
//! [[platform.behavior]]
//! type = "EffectCapability::EffectBehavior"
//! default-name = "Effect"
//! ```

mod error;
mod metadata;
mod platform;
mod registry;

pub use error::{MetadataError, Result};
pub use metadata::{BehaviorMetadata, ObjectMetadata};
pub use platform::{MetadataProvider, Platform};
pub use registry::{PlatformId, PlatformRegistry};
