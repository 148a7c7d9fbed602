use crate::NamedEntity;
use gamedoc_serial::Element;

/// Events stored outside of any scene, usable from the scene they are
/// associated with.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExternalEvents {
    name: String,
    associated_layout: String,
    events: Element,
    content: Element,
}

impl ExternalEvents {
    #[must_use]
    pub fn associated_layout(&self) -> &str {
        &self.associated_layout
    }

    pub fn set_associated_layout(&mut self, layout: &str) {
        self.associated_layout = layout.to_string();
    }

    #[must_use]
    pub fn events(&self) -> &Element {
        &self.events
    }

    pub fn unserialize_from(&mut self, element: &Element) {
        self.name = element.string_attribute_aliased("name", "Name", "");
        self.associated_layout =
            element.string_attribute_aliased("associatedLayout", "associatedScene", "");
        self.events = element.child_or("events", "Events").clone();
        self.content = element.without(&[
            "name",
            "Name",
            "associatedLayout",
            "associatedScene",
            "events",
            "Events",
        ]);
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("associatedLayout", self.associated_layout.as_str());
        let events = if self.events.is_empty() {
            Element::array()
        } else {
            self.events.clone()
        };
        element.set_child("events", events);
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for ExternalEvents {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}

/// Object instances stored outside of any scene, to be added to a scene at runtime.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExternalLayout {
    name: String,
    associated_layout: String,
    instances: Element,
    content: Element,
}

impl ExternalLayout {
    #[must_use]
    pub fn associated_layout(&self) -> &str {
        &self.associated_layout
    }

    pub fn set_associated_layout(&mut self, layout: &str) {
        self.associated_layout = layout.to_string();
    }

    #[must_use]
    pub fn instances(&self) -> &Element {
        &self.instances
    }

    pub fn unserialize_from(&mut self, element: &Element) {
        self.name = element.string_attribute("name", "");
        self.associated_layout = element.string_attribute("associatedLayout", "");
        self.instances = element.child("instances").clone();
        self.content = element.without(&["name", "associatedLayout", "instances"]);
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("associatedLayout", self.associated_layout.as_str());
        let instances = if self.instances.is_empty() {
            Element::array()
        } else {
            self.instances.clone()
        };
        element.set_child("instances", instances);
        element.extend_missing(&self.content);
    }
}

impl NamedEntity for ExternalLayout {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }
}
