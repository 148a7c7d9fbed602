//! Project documents for gamedoc.
//!
//! [`Project`] is the root of a saved game: scalar properties, the
//! platforms it targets, scenes, external events and layouts, and the
//! extensions declaring custom object and behavior types.
//!
//! Loading is where the work is:
//! - [`VersionCompatibility`] reinterprets fields of documents saved by
//!   older (or newer) versions of the tool
//! - [`TwoPhaseExtensionLoader`] declares every extension, then implements
//!   them in the order computed by [`ExtensionDependencyResolver`], so that
//!   custom objects embedding other extensions' objects are built complete
//! - [`DefaultBehaviorSynchronizer`] keeps each object's automatic behaviors
//!   in line with its type
//!
//! Problems found while loading never abort it. They are reported through a
//! [`Diagnostics`] sink and returned as a [`LoadReport`].

pub mod compat;
mod behaviors;
mod diagnostics;
mod error;
mod loader;
mod names;
mod project;
mod properties;
pub mod resolver;

pub use behaviors::DefaultBehaviorSynchronizer;
pub use compat::VersionCompatibility;
pub use diagnostics::{Diagnostic, Diagnostics, LoadReport, Severity};
pub use error::{ProjectError, Result};
pub use loader::TwoPhaseExtensionLoader;
pub use names::{is_name_safe, safe_name};
pub use project::{DEFAULT_PLATFORM, Project};
pub use properties::{ExtensionProperties, ProjectProperties};
pub use resolver::{ExtensionDependencyResolver, ExtensionDescriptor, LoadOrder};
