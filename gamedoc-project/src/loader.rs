//! Two-phase loading of extensions.
//!
//! Phase 1 declares every extension in document order, so that all custom
//! object and behavior types exist by name. Phase 2 reads implementations in
//! dependency order: when an extension is implemented, every custom object
//! type its objects embed already has its child objects, so those objects
//! are built complete.
//!
//! Variants of events-based objects are saved before re-declaration and
//! re-applied after every implemented extension. A variant embedding a type
//! from an extension implemented later in the order is thereby rebuilt once
//! that type is complete.

use crate::resolver::{ExtensionDependencyResolver, ExtensionDescriptor, LoadOrder};
use crate::{DefaultBehaviorSynchronizer, Diagnostics};
use gamedoc_metadata::MetadataProvider;
use gamedoc_model::{EntityCollection, EventsFunctionsExtension, NamedEntity, Object, ObjectTypeContext};
use gamedoc_serial::Element;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Object construction while extensions are being implemented.
///
/// Only custom object types of extensions already implemented resolve to
/// their child objects.
struct LoadContext<'a> {
    provider: Option<&'a dyn MetadataProvider>,
    diagnostics: &'a Diagnostics,
    custom_types: HashSet<String>,
    implemented: HashMap<String, Vec<Object>>,
}

impl LoadContext<'_> {
    fn record_implemented(&mut self, extension: &EventsFunctionsExtension) {
        for object in extension.events_based_objects() {
            self.implemented.insert(
                extension.object_full_type(object.name()),
                object.objects().objects().iter().cloned().collect(),
            );
        }
    }
}

impl ObjectTypeContext for LoadContext<'_> {
    fn ensure_default_behaviors(&self, object: &mut Object) {
        let is_custom_type = self.custom_types.contains(object.object_type());
        DefaultBehaviorSynchronizer::new(self.provider, self.diagnostics)
            .synchronize(object, is_custom_type);
    }

    fn custom_object_children(&self, object_type: &str) -> Option<Vec<Object>> {
        self.implemented.get(object_type).cloned()
    }
}

/// Variants of one events-based object, saved before re-declaration.
struct VariantSnapshot {
    extension: String,
    object: String,
    variants: Element,
}

/// Loads extension fragments into a project's extension collection.
pub struct TwoPhaseExtensionLoader<'a> {
    provider: Option<&'a dyn MetadataProvider>,
    diagnostics: &'a Diagnostics,
}

impl<'a> TwoPhaseExtensionLoader<'a> {
    /// `provider` is the current platform, used to attach default behaviors.
    #[must_use]
    pub fn new(provider: Option<&'a dyn MetadataProvider>, diagnostics: &'a Diagnostics) -> Self {
        Self {
            provider,
            diagnostics,
        }
    }

    /// Declares then implements every extension of `list` into `extensions`.
    ///
    /// Extensions already present with the same name are updated in place;
    /// the variants of their events-based objects survive re-declaration.
    /// Each extension is implemented exactly once. Returns the order used.
    pub fn load(
        &self,
        extensions: &mut EntityCollection<EventsFunctionsExtension>,
        list: &Element,
    ) -> LoadOrder {
        let fragments = list.array_items("eventsFunctionsExtension", "");
        let mut fragment_by_name: HashMap<String, &Element> = HashMap::new();
        let mut variant_snapshots: Vec<VariantSnapshot> = Vec::new();
        let mut descriptors = Vec::with_capacity(fragments.len());

        // Phase 1: declarations.
        for fragment in fragments {
            let name = fragment.string_attribute("name", "");
            let index = match extensions.position_of(&name) {
                Some(index) => index,
                None => {
                    extensions.insert_new(&name, usize::MAX);
                    extensions.len() - 1
                }
            };
            let Some(extension) = extensions.get_at_mut(index) else {
                continue;
            };

            for object in extension.events_based_objects() {
                if !object.variants().is_empty() {
                    variant_snapshots.push(VariantSnapshot {
                        extension: name.clone(),
                        object: object.name().to_string(),
                        variants: object.serialize_variants(),
                    });
                }
            }

            extension.unserialize_declaration_from(fragment);
            debug!(extension = %name, "Declared extension");

            descriptors.push(ExtensionDescriptor::from_element(fragment));
            fragment_by_name.insert(name, fragment);
        }

        variant_snapshots.retain(|snapshot| {
            let declared = extensions.get(&snapshot.extension).is_some_and(|extension| {
                extension.events_based_objects().has_named(&snapshot.object)
            });
            if !declared {
                self.diagnostics.warn(format!(
                    "Variants of {} are dropped: the object is no longer declared by extension {}",
                    snapshot.object, snapshot.extension
                ));
            }
            declared
        });

        let mut context = LoadContext {
            provider: self.provider,
            diagnostics: self.diagnostics,
            custom_types: extensions
                .iter()
                .flat_map(|extension| {
                    extension
                        .events_based_objects()
                        .iter()
                        .map(move |object| extension.object_full_type(object.name()))
                })
                .collect(),
            implemented: HashMap::new(),
        };
        for extension in extensions.iter() {
            if !fragment_by_name.contains_key(extension.name()) {
                context.record_implemented(extension);
            }
        }

        let load_order = ExtensionDependencyResolver::new(self.diagnostics).resolve(&descriptors);

        // Phase 2: implementations, dependencies first.
        for name in &load_order.order {
            let Some(fragment) = fragment_by_name.get(name.as_str()) else {
                self.diagnostics.error(format!(
                    "Can't find the saved content of extension {name} in the second pass of loading"
                ));
                continue;
            };
            let Some(extension) = extensions.get_mut(name) else {
                self.diagnostics.error(format!(
                    "Can't find extension {name} in the list of extensions in the second pass of loading"
                ));
                continue;
            };

            extension.unserialize_implementation_from(&context, fragment);
            context.record_implemented(extension);

            for snapshot in &variant_snapshots {
                if let Some(object) = extensions
                    .get_mut(&snapshot.extension)
                    .and_then(|extension| extension.events_based_objects_mut().get_mut(&snapshot.object))
                {
                    object.unserialize_variants(&context, &snapshot.variants);
                }
            }
            debug!(extension = %name, "Implemented extension");
        }

        load_order
    }
}
