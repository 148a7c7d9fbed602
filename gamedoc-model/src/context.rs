use crate::Object;

/// What object construction needs to know about the surrounding project.
///
/// Objects are built in several places (scenes, project-wide objects, child
/// objects of events-based objects, variants) and each of them must end up
/// with the default behaviors of its type and, for custom object types, the
/// child objects the type embeds. The model does not own the type registry,
/// so it asks through this trait.
pub trait ObjectTypeContext {
    /// Attach, keep or remove default behaviors so they match the object's type.
    fn ensure_default_behaviors(&self, object: &mut Object) {
        let _ = object;
    }

    /// Child objects embedded by a custom object type, if `object_type` is one
    /// and its implementation is available.
    fn custom_object_children(&self, object_type: &str) -> Option<Vec<Object>> {
        let _ = object_type;
        None
    }
}

/// Context that knows no types: objects are built exactly as serialized.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTypeContext;

impl ObjectTypeContext for NullTypeContext {}
