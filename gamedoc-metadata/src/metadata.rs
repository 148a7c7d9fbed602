use gamedoc_model::Behavior;
use gamedoc_serial::Element;

/// What a platform knows about one behavior type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BehaviorMetadata {
    behavior_type: String,
    default_name: String,
    default_properties: Element,
}

impl BehaviorMetadata {
    #[must_use]
    pub fn new(behavior_type: &str, default_name: &str) -> Self {
        Self {
            behavior_type: behavior_type.to_string(),
            default_name: default_name.to_string(),
            default_properties: Element::new(),
        }
    }

    #[must_use]
    pub fn with_default_properties(mut self, properties: Element) -> Self {
        self.default_properties = properties;
        self
    }

    #[must_use]
    pub fn behavior_type(&self) -> &str {
        &self.behavior_type
    }

    /// Name given to the behavior when it is attached automatically.
    #[must_use]
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    #[must_use]
    pub fn default_properties(&self) -> &Element {
        &self.default_properties
    }

    /// Builds a new behavior of this type, initialized with the default properties.
    #[must_use]
    pub fn create_behavior(&self, name: &str) -> Behavior {
        Behavior::new(name, &self.behavior_type).with_properties(self.default_properties.clone())
    }
}

/// What a platform knows about one object type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectMetadata {
    object_type: String,
    default_behaviors: Vec<String>,
}

impl ObjectMetadata {
    #[must_use]
    pub fn new(object_type: &str) -> Self {
        Self {
            object_type: object_type.to_string(),
            default_behaviors: Vec::new(),
        }
    }

    #[must_use]
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// Declares `behavior_type` as a default behavior. Duplicates are ignored.
    pub fn add_default_behavior(&mut self, behavior_type: &str) -> &mut Self {
        if !self.has_default_behavior(behavior_type) {
            self.default_behaviors.push(behavior_type.to_string());
        }
        self
    }

    /// Behavior types attached by default, in declaration order.
    #[must_use]
    pub fn default_behaviors(&self) -> &[String] {
        &self.default_behaviors
    }

    #[must_use]
    pub fn has_default_behavior(&self, behavior_type: &str) -> bool {
        self.default_behaviors.iter().any(|t| t == behavior_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_behaviors_are_deduplicated() {
        let mut sprite = ObjectMetadata::new("Sprite");
        sprite
            .add_default_behavior("EffectCapability::EffectBehavior")
            .add_default_behavior("OpacityCapability::OpacityBehavior")
            .add_default_behavior("EffectCapability::EffectBehavior");
        assert_eq!(
            sprite.default_behaviors(),
            ["EffectCapability::EffectBehavior", "OpacityCapability::OpacityBehavior"]
        );
    }

    #[test]
    fn create_behavior_copies_defaults() {
        let mut properties = Element::new();
        properties.set_attribute("density", 1.0);
        let physics = BehaviorMetadata::new("Physics2::Physics2Behavior", "Physics2")
            .with_default_properties(properties);

        let behavior = physics.create_behavior("Body");
        assert_eq!(behavior.name(), "Body");
        assert_eq!(behavior.type_name(), "Physics2::Physics2Behavior");
        assert!(!behavior.is_default_behavior());
        assert_eq!(behavior.properties().double_attribute("density", 0.0), 1.0);
    }
}
