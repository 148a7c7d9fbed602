//! Load order of extensions whose custom objects embed each other's types.
//!
//! A custom object can only be built once every custom object type it
//! embeds is fully implemented. The resolver orders extensions so that an
//! extension comes after every other extension it takes child object types
//! from.

use crate::Diagnostics;
use gamedoc_model::{EventsFunctionsExtension, NamedEntity};
use gamedoc_serial::Element;
use gamedoc_types::extension_of;
use serde::Serialize;
use tracing::debug;

/// A custom object type and the full types of the child objects it embeds.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomObjectDeclaration {
    pub name: String,
    pub child_types: Vec<String>,
}

/// What the resolver needs to know about one extension.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionDescriptor {
    pub name: String,
    pub objects: Vec<CustomObjectDeclaration>,
}

impl ExtensionDescriptor {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            objects: Vec::new(),
        }
    }

    /// Declares a custom object embedding children of `child_types`.
    #[must_use]
    pub fn with_object(mut self, name: &str, child_types: &[&str]) -> Self {
        self.objects.push(CustomObjectDeclaration {
            name: name.to_string(),
            child_types: child_types.iter().map(|t| (*t).to_string()).collect(),
        });
        self
    }

    /// Reads the descriptor from a saved extension.
    ///
    /// Child types are taken from the objects of each events-based object
    /// and of each of its variants.
    #[must_use]
    pub fn from_element(element: &Element) -> Self {
        let objects = element
            .child("eventsBasedObjects")
            .array_items("eventsBasedObject", "")
            .into_iter()
            .map(|object| {
                let mut child_types = object_types_of(object);
                for variant in object.child("variants").array_items("variant", "") {
                    child_types.extend(object_types_of(variant));
                }
                CustomObjectDeclaration {
                    name: object.string_attribute("name", ""),
                    child_types,
                }
            })
            .collect();
        Self {
            name: element.string_attribute("name", ""),
            objects,
        }
    }

    #[must_use]
    pub fn from_extension(extension: &EventsFunctionsExtension) -> Self {
        Self {
            name: extension.name().to_string(),
            objects: extension
                .events_based_objects()
                .iter()
                .map(|object| CustomObjectDeclaration {
                    name: object.name().to_string(),
                    child_types: object.child_object_types(),
                })
                .collect(),
        }
    }

    /// Names of the other extensions this one takes child object types from.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.objects
            .iter()
            .flat_map(|object| object.child_types.iter())
            .map(|child_type| extension_of(child_type))
            .filter(move |extension| !extension.is_empty() && *extension != self.name)
    }

    fn is_blocked_by(&self, remaining: &[&ExtensionDescriptor]) -> bool {
        self.dependencies()
            .any(|dependency| remaining.iter().any(|other| other.name == dependency))
    }
}

fn object_types_of(container: &Element) -> Vec<String> {
    container
        .child_or("objects", "Objects")
        .array_items("object", "Object")
        .into_iter()
        .map(|object| object.string_attribute("type", ""))
        .collect()
}

/// Result of ordering a set of extensions.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LoadOrder {
    /// Every extension exactly once, dependencies first.
    pub order: Vec<String>,
    /// Extensions that could not be ordered (a dependency cycle), appended
    /// to `order` in document order.
    pub unresolved: Vec<String>,
}

/// Orders extensions so that each comes after those it embeds objects from.
pub struct ExtensionDependencyResolver<'a> {
    diagnostics: &'a Diagnostics,
}

impl<'a> ExtensionDependencyResolver<'a> {
    #[must_use]
    pub fn new(diagnostics: &'a Diagnostics) -> Self {
        Self { diagnostics }
    }

    /// Computes the load order of `descriptors`.
    ///
    /// Each pass moves every extension that no longer depends on a remaining
    /// one, keeping document order among them. References to extensions
    /// that are not part of `descriptors` never block. When a pass moves
    /// nothing the rest is appended in document order and reported as a
    /// cycle. Descriptors repeating an earlier name are ignored.
    #[must_use]
    pub fn resolve(&self, descriptors: &[ExtensionDescriptor]) -> LoadOrder {
        let mut remaining: Vec<&ExtensionDescriptor> = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            if remaining.iter().any(|d| d.name == descriptor.name) {
                self.diagnostics.warn(format!(
                    "Extension {} is declared more than once, only its first declaration is ordered",
                    descriptor.name
                ));
                continue;
            }
            remaining.push(descriptor);
        }

        let mut order = Vec::with_capacity(remaining.len());
        let mut pass = 0;
        loop {
            pass += 1;
            let mut moved = 0;
            let mut index = 0;
            while index < remaining.len() {
                if remaining[index].is_blocked_by(&remaining) {
                    index += 1;
                } else {
                    order.push(remaining.remove(index).name.clone());
                    moved += 1;
                }
            }
            debug!(pass, moved, remaining = remaining.len(), "Extension ordering pass");
            if moved == 0 {
                break;
            }
        }

        let unresolved: Vec<String> = remaining.iter().map(|d| d.name.clone()).collect();
        if !unresolved.is_empty() {
            self.diagnostics.warn(format!(
                "Extensions {} embed objects from each other (dependency cycle); \
                 they are loaded in document order and some custom objects may be incomplete",
                unresolved.join(", ")
            ));
            order.extend(unresolved.iter().cloned());
        }

        LoadOrder { order, unresolved }
    }
}
