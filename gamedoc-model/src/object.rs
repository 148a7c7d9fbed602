use crate::{Behavior, EntityCollection, NamedEntity, ObjectTypeContext};
use gamedoc_serial::Element;
use std::collections::BTreeMap;

const OBJECT_KEYS: &[&str] = &["name", "type", "behaviors"];

/// An object declared in a scene, in the project, or inside an
/// events-based object.
///
/// Behaviors are keyed by name, so an object never has two behaviors with
/// the same name. `children` holds the child objects materialized from a
/// custom object type when the object was built; it is derived from the
/// type's definition and never saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Object {
    name: String,
    object_type: String,
    behaviors: BTreeMap<String, Behavior>,
    children: Vec<Object>,
    content: Element,
}

impl Object {
    #[must_use]
    pub fn new(name: &str, object_type: &str) -> Self {
        Self {
            name: name.to_string(),
            object_type: object_type.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Changes the type. Callers re-synchronize default behaviors afterwards.
    pub fn set_object_type(&mut self, object_type: &str) {
        self.object_type = object_type.to_string();
    }

    // ── Behaviors ────────────────────────────────────────────────

    #[must_use]
    pub fn has_behavior_named(&self, name: &str) -> bool {
        self.behaviors.contains_key(name)
    }

    #[must_use]
    pub fn behavior(&self, name: &str) -> Option<&Behavior> {
        self.behaviors.get(name)
    }

    pub fn behavior_mut(&mut self, name: &str) -> Option<&mut Behavior> {
        self.behaviors.get_mut(name)
    }

    /// Adds `behavior`, replacing any behavior with the same name.
    pub fn insert_behavior(&mut self, behavior: Behavior) -> &mut Behavior {
        let slot = self
            .behaviors
            .entry(behavior.name().to_string())
            .or_default();
        *slot = behavior;
        slot
    }

    pub fn remove_behavior(&mut self, name: &str) -> Option<Behavior> {
        self.behaviors.remove(name)
    }

    #[must_use]
    pub fn behavior_names(&self) -> Vec<String> {
        self.behaviors.keys().cloned().collect()
    }

    pub fn behaviors(&self) -> impl Iterator<Item = &Behavior> {
        self.behaviors.values()
    }

    // ── Custom object children ───────────────────────────────────

    #[must_use]
    pub fn children(&self) -> &[Object] {
        &self.children
    }

    pub fn set_children(&mut self, children: Vec<Object>) {
        self.children = children;
    }

    #[must_use]
    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn content_mut(&mut self) -> &mut Element {
        &mut self.content
    }

    // ── Serialization ────────────────────────────────────────────

    /// Builds an object from its saved form.
    ///
    /// Custom object children are resolved through `context`, saved
    /// behaviors are restored, then default behaviors are reconciled with
    /// the object's type.
    #[must_use]
    pub fn unserialize_from(context: &dyn ObjectTypeContext, element: &Element) -> Self {
        let object_type = element.string_attribute("type", "");
        let mut object = Self {
            name: element.string_attribute("name", ""),
            children: context
                .custom_object_children(&object_type)
                .unwrap_or_default(),
            object_type,
            behaviors: BTreeMap::new(),
            content: element.without(OBJECT_KEYS),
        };
        for behavior_element in element.child("behaviors").array_items("behavior", "") {
            let behavior = Behavior::unserialize_from(behavior_element);
            object.behaviors.insert(behavior.name().to_string(), behavior);
        }
        context.ensure_default_behaviors(&mut object);
        object
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("type", self.object_type.as_str());
        let mut behaviors = Element::array();
        for behavior in self.behaviors.values() {
            behavior.serialize_to(behaviors.add_child("behavior"));
        }
        element.set_child("behaviors", behaviors);
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for Object {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// Objects of a scene, of the project, or of an events-based object,
/// together with their groups and folder layout.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectsContainer {
    objects: EntityCollection<Object>,
    groups: Element,
    folders: Option<Element>,
}

impl ObjectsContainer {
    /// Keys of the parent element this container reads and writes.
    pub const KEYS: &'static [&'static str] = &[
        "objects",
        "Objects",
        "objectsGroups",
        "ObjectGroups",
        "objectsFolderStructure",
    ];

    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn objects(&self) -> &EntityCollection<Object> {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut EntityCollection<Object> {
        &mut self.objects
    }

    #[must_use]
    pub fn groups(&self) -> &Element {
        &self.groups
    }

    #[must_use]
    pub fn folders(&self) -> Option<&Element> {
        self.folders.as_ref()
    }

    /// Types of every object in the container.
    pub fn object_types(&self) -> impl Iterator<Item = &str> {
        self.objects.iter().map(|object| object.object_type())
    }

    /// Reads `objects`, `objectsGroups` and `objectsFolderStructure` from `parent`.
    pub fn unserialize_from(&mut self, context: &dyn ObjectTypeContext, parent: &Element) {
        self.objects = parent
            .child_or("objects", "Objects")
            .array_items("object", "Object")
            .into_iter()
            .map(|element| Object::unserialize_from(context, element))
            .collect();
        self.groups = parent.child_or("objectsGroups", "ObjectGroups").clone();
        self.folders = parent
            .has_child("objectsFolderStructure")
            .then(|| parent.child("objectsFolderStructure").clone());
    }

    pub fn serialize_to(&self, parent: &mut Element) {
        let mut objects = Element::array();
        for object in &self.objects {
            object.serialize_to(objects.add_child("object"));
        }
        parent.set_child("objects", objects);
        let groups = if self.groups.is_empty() {
            Element::array()
        } else {
            self.groups.clone()
        };
        parent.set_child("objectsGroups", groups);
        if let Some(folders) = &self.folders {
            parent.set_child("objectsFolderStructure", folders.clone());
        }
    }
}
