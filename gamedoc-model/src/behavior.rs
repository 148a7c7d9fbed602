use gamedoc_serial::Element;

const BEHAVIOR_KEYS: &[&str] = &["name", "type", "isDefaultBehavior"];

/// A behavior attached to an object.
///
/// `default_behavior` marks behaviors attached automatically because the
/// object's type declares them. User-added behaviors never carry the flag.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Behavior {
    name: String,
    type_name: String,
    default_behavior: bool,
    properties: Element,
}

impl Behavior {
    #[must_use]
    pub fn new(name: &str, type_name: &str) -> Self {
        Self {
            name: name.to_string(),
            type_name: type_name.to_string(),
            default_behavior: false,
            properties: Element::new(),
        }
    }

    #[must_use]
    pub fn with_properties(mut self, properties: Element) -> Self {
        self.properties = properties;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    #[must_use]
    pub fn is_default_behavior(&self) -> bool {
        self.default_behavior
    }

    pub fn set_default_behavior(&mut self, default_behavior: bool) {
        self.default_behavior = default_behavior;
    }

    #[must_use]
    pub fn properties(&self) -> &Element {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut Element {
        &mut self.properties
    }

    #[must_use]
    pub fn unserialize_from(element: &Element) -> Self {
        Self {
            name: element.string_attribute("name", ""),
            type_name: element.string_attribute("type", ""),
            default_behavior: element.bool_attribute("isDefaultBehavior", false),
            properties: element.without(BEHAVIOR_KEYS),
        }
    }

    pub fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("type", self.type_name.as_str());
        if self.default_behavior {
            element.set_attribute("isDefaultBehavior", true);
        }
        element.extend_missing(&self.properties);
    }
}
