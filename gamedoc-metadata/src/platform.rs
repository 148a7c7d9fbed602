use crate::{BehaviorMetadata, ObjectMetadata};
use std::collections::BTreeMap;

/// Type lookups used when reconciling objects with their type.
///
/// Lookups are keyed by full type tokens; `None` means the type is unknown
/// to the provider.
pub trait MetadataProvider {
    fn object_metadata(&self, object_type: &str) -> Option<&ObjectMetadata>;
    fn behavior_metadata(&self, behavior_type: &str) -> Option<&BehaviorMetadata>;
}

/// A runtime a project can target, with the types it provides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Platform {
    name: String,
    objects: BTreeMap<String, ObjectMetadata>,
    behaviors: BTreeMap<String, BehaviorMetadata>,
}

impl Platform {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers an object type, replacing any previous one with the same type.
    pub fn add_object(&mut self, metadata: ObjectMetadata) -> &mut Self {
        self.objects
            .insert(metadata.object_type().to_string(), metadata);
        self
    }

    /// Registers a behavior type, replacing any previous one with the same type.
    pub fn add_behavior(&mut self, metadata: BehaviorMetadata) -> &mut Self {
        self.behaviors
            .insert(metadata.behavior_type().to_string(), metadata);
        self
    }

    pub fn object_types(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    pub fn behavior_types(&self) -> impl Iterator<Item = &str> {
        self.behaviors.keys().map(String::as_str)
    }
}

impl MetadataProvider for Platform {
    fn object_metadata(&self, object_type: &str) -> Option<&ObjectMetadata> {
        self.objects.get(object_type)
    }

    fn behavior_metadata(&self, behavior_type: &str) -> Option<&BehaviorMetadata> {
        self.behaviors.get(behavior_type)
    }
}
