//! Extensions and the events-based types they declare.
//!
//! Loading an extension is split in two. The *declaration* gives the
//! extension its name, its properties and the names and shapes of its
//! events-based behaviors and objects. The *implementation* fills in events
//! functions, behavior and object bodies, child objects and variants.
//! Declarations of every extension must exist before any implementation is
//! read, because implementations reference types from other extensions.

use crate::{EntityCollection, NamedEntity, Object, ObjectTypeContext, ObjectsContainer};
use gamedoc_serial::Element;
use gamedoc_types::full_type;

fn unserialize_functions(element: &Element) -> EntityCollection<EventsFunction> {
    element
        .child("eventsFunctions")
        .array_items("eventsFunction", "")
        .into_iter()
        .map(EventsFunction::unserialize_from)
        .collect()
}

fn serialize_functions(functions: &EntityCollection<EventsFunction>, element: &mut Element) {
    let mut list = Element::array();
    for function in functions {
        function.serialize_to(list.add_child("eventsFunction"));
    }
    element.set_child("eventsFunctions", list);
}

// ── EventsFunction ───────────────────────────────────────────────────

/// A function written with events. Parameters and events are kept as saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventsFunction {
    name: String,
    function_type: String,
    content: Element,
}

impl EventsFunction {
    #[must_use]
    pub fn function_type(&self) -> &str {
        &self.function_type
    }

    #[must_use]
    pub fn content(&self) -> &Element {
        &self.content
    }

    #[must_use]
    pub fn unserialize_from(element: &Element) -> Self {
        Self {
            name: element.string_attribute("name", ""),
            function_type: element.string_attribute("functionType", "Action"),
            content: element.without(&["name", "functionType"]),
        }
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("functionType", self.function_type.as_str());
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for EventsFunction {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

// ── EventsBasedBehavior ──────────────────────────────────────────────

const BEHAVIOR_DECLARATION_KEYS: &[&str] = &["name", "fullName", "objectType"];

/// A behavior type implemented with events.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventsBasedBehavior {
    name: String,
    full_name: String,
    object_type: String,
    events_functions: EntityCollection<EventsFunction>,
    content: Element,
}

impl EventsBasedBehavior {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Type of object this behavior can be attached to (empty for any).
    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    #[must_use]
    pub fn events_functions(&self) -> &EntityCollection<EventsFunction> {
        &self.events_functions
    }

    pub fn unserialize_declaration_from(&mut self, element: &Element) {
        self.name = element.string_attribute("name", "");
        self.full_name = element.string_attribute("fullName", "");
        self.object_type = element.string_attribute("objectType", "");
    }

    pub fn unserialize_implementation_from(&mut self, element: &Element) {
        self.events_functions = unserialize_functions(element);
        let mut skipped = BEHAVIOR_DECLARATION_KEYS.to_vec();
        skipped.push("eventsFunctions");
        self.content = element.without(&skipped);
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("fullName", self.full_name.as_str());
        element.set_attribute("objectType", self.object_type.as_str());
        serialize_functions(&self.events_functions, element);
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for EventsBasedBehavior {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

// ── EventsBasedObjectVariant ─────────────────────────────────────────

/// An alternate presentation of a custom object: its own child objects,
/// instances and layers.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventsBasedObjectVariant {
    name: String,
    objects: ObjectsContainer,
    content: Element,
}

impl EventsBasedObjectVariant {
    #[must_use]
    pub fn objects(&self) -> &ObjectsContainer {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectsContainer {
        &mut self.objects
    }

    pub fn unserialize_from(&mut self, context: &dyn ObjectTypeContext, element: &Element) {
        self.name = element.string_attribute("name", "");
        self.objects.unserialize_from(context, element);
        let mut skipped = vec!["name"];
        skipped.extend_from_slice(ObjectsContainer::KEYS);
        self.content = element.without(&skipped);
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        self.objects.serialize_to(element);
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for EventsBasedObjectVariant {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

// ── EventsBasedObject ────────────────────────────────────────────────

const OBJECT_DECLARATION_KEYS: &[&str] = &["name", "fullName", "defaultName"];

/// A custom object type implemented with events and composed of child objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventsBasedObject {
    name: String,
    full_name: String,
    default_name: String,
    objects: ObjectsContainer,
    events_functions: EntityCollection<EventsFunction>,
    variants: EntityCollection<EventsBasedObjectVariant>,
    content: Element,
}

impl EventsBasedObject {
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Child objects of the default variant.
    #[must_use]
    pub fn objects(&self) -> &ObjectsContainer {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectsContainer {
        &mut self.objects
    }

    #[must_use]
    pub fn events_functions(&self) -> &EntityCollection<EventsFunction> {
        &self.events_functions
    }

    #[must_use]
    pub fn variants(&self) -> &EntityCollection<EventsBasedObjectVariant> {
        &self.variants
    }

    pub fn variants_mut(&mut self) -> &mut EntityCollection<EventsBasedObjectVariant> {
        &mut self.variants
    }

    /// Types of the child objects embedded by the default variant and every
    /// other variant, in declaration order.
    #[must_use]
    pub fn child_object_types(&self) -> Vec<String> {
        self.objects
            .object_types()
            .chain(
                self.variants
                    .iter()
                    .flat_map(|variant| variant.objects.object_types()),
            )
            .map(str::to_string)
            .collect()
    }

    pub fn unserialize_declaration_from(&mut self, element: &Element) {
        self.name = element.string_attribute("name", "");
        self.full_name = element.string_attribute("fullName", "");
        self.default_name = element.string_attribute("defaultName", "");
        self.objects = ObjectsContainer::new();
        self.variants = EntityCollection::new();
    }

    pub fn unserialize_implementation_from(
        &mut self,
        context: &dyn ObjectTypeContext,
        element: &Element,
    ) {
        self.objects.unserialize_from(context, element);
        self.events_functions = unserialize_functions(element);
        self.unserialize_variants(context, element.child("variants"));
        let mut skipped = OBJECT_DECLARATION_KEYS.to_vec();
        skipped.extend_from_slice(ObjectsContainer::KEYS);
        skipped.extend_from_slice(&["eventsFunctions", "variants"]);
        self.content = element.without(&skipped);
    }

    /// Snapshot of the variants, in their saved form.
    #[must_use]
    pub fn serialize_variants(&self) -> Element {
        let mut list = Element::array();
        for variant in &self.variants {
            variant.serialize_to(list.add_child("variant"));
        }
        list
    }

    /// Replaces the variants with the ones saved in `element`.
    pub fn unserialize_variants(&mut self, context: &dyn ObjectTypeContext, element: &Element) {
        self.variants = element
            .array_items("variant", "")
            .into_iter()
            .map(|variant_element| {
                let mut variant = EventsBasedObjectVariant::default();
                variant.unserialize_from(context, variant_element);
                variant
            })
            .collect();
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("fullName", self.full_name.as_str());
        element.set_attribute("defaultName", self.default_name.as_str());
        self.objects.serialize_to(element);
        serialize_functions(&self.events_functions, element);
        element.set_child("variants", self.serialize_variants());
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for EventsBasedObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

// ── EventsFunctionsExtension ─────────────────────────────────────────

const EXTENSION_KEYS: &[&str] = &[
    "name",
    "namespace",
    "version",
    "fullName",
    "description",
    "eventsFunctions",
    "eventsBasedBehaviors",
    "eventsBasedObjects",
];

/// A named bundle of events functions, events-based behaviors and
/// events-based objects.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventsFunctionsExtension {
    name: String,
    namespace: String,
    version: String,
    full_name: String,
    description: String,
    events_functions: EntityCollection<EventsFunction>,
    events_based_behaviors: EntityCollection<EventsBasedBehavior>,
    events_based_objects: EntityCollection<EventsBasedObject>,
    content: Element,
}

impl EventsFunctionsExtension {
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn events_functions(&self) -> &EntityCollection<EventsFunction> {
        &self.events_functions
    }

    #[must_use]
    pub fn events_based_behaviors(&self) -> &EntityCollection<EventsBasedBehavior> {
        &self.events_based_behaviors
    }

    pub fn events_based_behaviors_mut(&mut self) -> &mut EntityCollection<EventsBasedBehavior> {
        &mut self.events_based_behaviors
    }

    #[must_use]
    pub fn events_based_objects(&self) -> &EntityCollection<EventsBasedObject> {
        &self.events_based_objects
    }

    pub fn events_based_objects_mut(&mut self) -> &mut EntityCollection<EventsBasedObject> {
        &mut self.events_based_objects
    }

    /// Full type (`Extension::Object`) of one of this extension's objects.
    #[must_use]
    pub fn object_full_type(&self, object_name: &str) -> String {
        full_type(&self.name, object_name)
    }

    /// Child objects the custom object type `object_name` embeds, if declared.
    #[must_use]
    pub fn custom_object_children(&self, object_name: &str) -> Option<Vec<Object>> {
        self.events_based_objects
            .get(object_name)
            .map(|object| object.objects().objects().iter().cloned().collect())
    }

    /// Reads the extension properties and the names and shapes of its
    /// events-based behaviors and objects. Bodies are left empty.
    pub fn unserialize_declaration_from(&mut self, element: &Element) {
        self.name = element.string_attribute("name", "");
        self.namespace = element.string_attribute("namespace", "");
        self.version = element.string_attribute("version", "");
        self.full_name = element.string_attribute("fullName", "");
        self.description = element.string_attribute("description", "");
        self.content = element.without(EXTENSION_KEYS);
        self.events_functions = EntityCollection::new();

        self.events_based_behaviors = element
            .child("eventsBasedBehaviors")
            .array_items("eventsBasedBehavior", "")
            .into_iter()
            .map(|behavior_element| {
                let mut behavior = EventsBasedBehavior::default();
                behavior.unserialize_declaration_from(behavior_element);
                behavior
            })
            .collect();

        self.events_based_objects = element
            .child("eventsBasedObjects")
            .array_items("eventsBasedObject", "")
            .into_iter()
            .map(|object_element| {
                let mut object = EventsBasedObject::default();
                object.unserialize_declaration_from(object_element);
                object
            })
            .collect();
    }

    /// Reads events functions and the bodies of the declared behaviors and
    /// objects. Entries not declared beforehand are ignored.
    pub fn unserialize_implementation_from(
        &mut self,
        context: &dyn ObjectTypeContext,
        element: &Element,
    ) {
        self.events_functions = unserialize_functions(element);

        for behavior_element in element
            .child("eventsBasedBehaviors")
            .array_items("eventsBasedBehavior", "")
        {
            let name = behavior_element.string_attribute("name", "");
            if let Some(behavior) = self.events_based_behaviors.get_mut(&name) {
                behavior.unserialize_implementation_from(behavior_element);
            }
        }

        for object_element in element
            .child("eventsBasedObjects")
            .array_items("eventsBasedObject", "")
        {
            let name = object_element.string_attribute("name", "");
            if let Some(object) = self.events_based_objects.get_mut(&name) {
                object.unserialize_implementation_from(context, object_element);
            }
        }
    }

    /// Declaration then implementation, for loading a single extension that
    /// depends on nothing else.
    pub fn unserialize_from(&mut self, context: &dyn ObjectTypeContext, element: &Element) {
        self.unserialize_declaration_from(element);
        self.unserialize_implementation_from(context, element);
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("namespace", self.namespace.as_str());
        element.set_attribute("version", self.version.as_str());
        element.set_attribute("fullName", self.full_name.as_str());
        element.set_attribute("description", self.description.as_str());
        serialize_functions(&self.events_functions, element);

        let mut behaviors = Element::array();
        for behavior in &self.events_based_behaviors {
            behavior.serialize_to(behaviors.add_child("eventsBasedBehavior"));
        }
        element.set_child("eventsBasedBehaviors", behaviors);

        let mut objects = Element::array();
        for object in &self.events_based_objects {
            object.serialize_to(objects.add_child("eventsBasedObject"));
        }
        element.set_child("eventsBasedObjects", objects);

        element.extend_missing(&self.content);
    }
}

impl NamedEntity for EventsFunctionsExtension {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
