//! Reconciliation of an object's default behaviors with its type.

use crate::Diagnostics;
use gamedoc_metadata::MetadataProvider;
use gamedoc_model::{NamedEntity, Object};

/// Keeps the behaviors attached automatically to an object in line with
/// the default behaviors its type declares.
///
/// Behaviors added by users (not flagged default) are left alone, except
/// when one occupies the name a default behavior needs.
pub struct DefaultBehaviorSynchronizer<'a> {
    provider: Option<&'a dyn MetadataProvider>,
    diagnostics: &'a Diagnostics,
}

impl<'a> DefaultBehaviorSynchronizer<'a> {
    /// `provider` is the current platform; `None` when the project has none.
    #[must_use]
    pub fn new(provider: Option<&'a dyn MetadataProvider>, diagnostics: &'a Diagnostics) -> Self {
        Self {
            provider,
            diagnostics,
        }
    }

    /// Reconciles `object`.
    ///
    /// `is_custom_type` tells whether the object's type is declared by an
    /// extension of the project; such types are not in the registry and
    /// are skipped without a warning.
    pub fn synchronize(&self, object: &mut Object, is_custom_type: bool) {
        let Some(provider) = self.provider else {
            self.diagnostics.error(format!(
                "Project has no current platform, default behaviors of object {} can't be updated",
                object.name()
            ));
            return;
        };

        let Some(object_metadata) = provider.object_metadata(object.object_type()) else {
            if !is_custom_type {
                self.diagnostics.warn(format!(
                    "Object {} has an unknown type: {}",
                    object.name(),
                    object.object_type()
                ));
            }
            return;
        };

        for behavior_type in object_metadata.default_behaviors() {
            let Some(behavior_metadata) = provider.behavior_metadata(behavior_type) else {
                self.diagnostics.warn(format!(
                    "Object type {} has an unknown default behavior: {}",
                    object.object_type(),
                    behavior_type
                ));
                continue;
            };

            let name = behavior_metadata.default_name();
            let reusable = object
                .behavior(name)
                .map(|b| b.is_default_behavior() && b.type_name() == behavior_type);
            match reusable {
                Some(true) => {}
                Some(false) | None => {
                    let mut behavior = behavior_metadata.create_behavior(name);
                    behavior.set_default_behavior(true);
                    object.insert_behavior(behavior);
                }
            }
        }

        let stale: Vec<String> = object
            .behaviors()
            .filter(|b| {
                b.is_default_behavior() && !object_metadata.has_default_behavior(b.type_name())
            })
            .map(|b| b.name().to_string())
            .collect();
        for name in stale {
            object.remove_behavior(&name);
        }
    }
}
