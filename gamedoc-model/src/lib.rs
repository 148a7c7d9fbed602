//! Document model for gamedoc projects.
//!
//! Defines the entities a project owns and how each one reads itself from,
//! and writes itself to, the attribute tree:
//! - [`EntityCollection`]: the named, ordered, owning list reused for every
//!   top-level list (scenes, external events, external layouts, extensions)
//! - [`Object`] and [`Behavior`]: objects with their attached behaviors
//! - [`Layout`], [`ExternalEvents`], [`ExternalLayout`]
//! - [`EventsFunctionsExtension`] with its events-based objects and behaviors
//! - [`ObjectTypeContext`]: how object construction asks the surrounding
//!   project about types it does not know itself
//!
//! Fields the model does not interpret are kept verbatim and written back
//! on save.

mod behavior;
mod collection;
mod context;
mod extension;
mod external;
mod layout;
mod object;

pub use behavior::Behavior;
pub use collection::{EntityCollection, NamedEntity};
pub use context::{NullTypeContext, ObjectTypeContext};
pub use extension::{
    EventsBasedBehavior, EventsBasedObject, EventsBasedObjectVariant, EventsFunction,
    EventsFunctionsExtension,
};
pub use external::{ExternalEvents, ExternalLayout};
pub use layout::Layout;
pub use object::{Object, ObjectsContainer};
