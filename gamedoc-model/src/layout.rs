use crate::{NamedEntity, ObjectTypeContext, ObjectsContainer};
use gamedoc_serial::Element;

/// A scene.
///
/// Only the name and the objects are modelled; instances, layers, events
/// and everything else are kept as saved.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    name: String,
    objects: ObjectsContainer,
    content: Element,
}

impl Layout {
    #[must_use]
    pub fn objects(&self) -> &ObjectsContainer {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectsContainer {
        &mut self.objects
    }

    #[must_use]
    pub fn content(&self) -> &Element {
        &self.content
    }

    pub fn unserialize_from(&mut self, context: &dyn ObjectTypeContext, element: &Element) {
        self.name = element.string_attribute_aliased("name", "nom", "");
        self.objects.unserialize_from(context, element);
        let mut skipped = vec!["name", "nom"];
        skipped.extend_from_slice(ObjectsContainer::KEYS);
        self.content = element.without(&skipped);
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        self.objects.serialize_to(element);
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for Layout {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
