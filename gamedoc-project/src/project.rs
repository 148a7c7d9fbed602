//! The project document.

use crate::compat::{VersionCompatibility, document_version_of};
use crate::loader::TwoPhaseExtensionLoader;
use crate::resolver::LoadOrder;
use crate::{DefaultBehaviorSynchronizer, Diagnostics, LoadReport, ProjectProperties, Result};
use gamedoc_metadata::{MetadataProvider, Platform, PlatformId, PlatformRegistry};
use gamedoc_model::{
    EntityCollection, EventsBasedBehavior, EventsBasedObject, EventsFunctionsExtension,
    ExternalEvents, ExternalLayout, Layout, NamedEntity, Object, ObjectTypeContext,
    ObjectsContainer,
};
use gamedoc_serial::Element;
use gamedoc_types::{DocumentVersion, NAMESPACE_SEPARATOR};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Platform targeted by documents that list none.
pub const DEFAULT_PLATFORM: &str = "GDevelop C++ platform";

/// Top-level keys read by [`Project::unserialize_from`].
const PROJECT_KEYS: &[&str] = &[
    "gdVersion",
    "GDVersion",
    "properties",
    "Info",
    "resources",
    "Resources",
    "objects",
    "Objects",
    "objectsGroups",
    "ObjectGroups",
    "objectsFolderStructure",
    "variables",
    "Variables",
    "firstLayout",
    "layouts",
    "Scenes",
    "externalEvents",
    "ExternalEvents",
    "eventsFunctionsExtensions",
    "externalLayouts",
    "ExternalLayouts",
];

/// A game project: its properties, platforms, scenes, external events and
/// layouts, and the extensions declaring its custom types.
///
/// Platforms are borrowed from a [`PlatformRegistry`] shared with the rest
/// of the tool; the project only stores handles to them.
#[derive(Debug, Clone)]
pub struct Project {
    properties: ProjectProperties,
    first_layout: String,
    project_file: PathBuf,

    registry: Arc<PlatformRegistry>,
    platforms: Vec<PlatformId>,
    current_platform: Option<PlatformId>,

    tool_version: DocumentVersion,
    document_version: DocumentVersion,

    objects: ObjectsContainer,
    resources: Element,
    variables: Element,
    layouts: EntityCollection<Layout>,
    external_events: EntityCollection<ExternalEvents>,
    external_layouts: EntityCollection<ExternalLayout>,
    extensions: EntityCollection<EventsFunctionsExtension>,
    content: Element,

    diagnostics: Diagnostics,
}

impl Default for Project {
    fn default() -> Self {
        Self::new(Arc::new(PlatformRegistry::default()))
    }
}

impl Project {
    /// Creates an empty project using platforms from `registry`.
    #[must_use]
    pub fn new(registry: Arc<PlatformRegistry>) -> Self {
        Self {
            properties: ProjectProperties::default(),
            first_layout: String::new(),
            project_file: PathBuf::new(),
            registry,
            platforms: Vec::new(),
            current_platform: None,
            tool_version: DocumentVersion::CURRENT,
            document_version: DocumentVersion::CURRENT,
            objects: ObjectsContainer::new(),
            resources: Element::new(),
            variables: Element::array(),
            layouts: EntityCollection::new(),
            external_events: EntityCollection::new(),
            external_layouts: EntityCollection::new(),
            extensions: EntityCollection::new(),
            content: Element::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Sets the version of the running tool, used for compatibility checks
    /// on load and stamped into saved documents.
    #[must_use]
    pub fn with_tool_version(mut self, tool_version: DocumentVersion) -> Self {
        self.tool_version = tool_version;
        self
    }

    /// Parses and loads a project from JSON text.
    pub fn from_json_str(
        text: &str,
        registry: Arc<PlatformRegistry>,
    ) -> Result<(Self, LoadReport)> {
        Self::from_json_str_with_version(text, registry, DocumentVersion::CURRENT)
    }

    pub fn from_json_str_with_version(
        text: &str,
        registry: Arc<PlatformRegistry>,
        tool_version: DocumentVersion,
    ) -> Result<(Self, LoadReport)> {
        let element = Element::from_json_str(text)?;
        let mut project = Self::new(registry).with_tool_version(tool_version);
        let report = project.unserialize_from(&element);
        Ok((project, report))
    }

    /// Loads a project file. The path is remembered as the project file.
    pub fn load_file(
        path: impl AsRef<Path>,
        registry: Arc<PlatformRegistry>,
        tool_version: DocumentVersion,
    ) -> Result<(Self, LoadReport)> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let (mut project, report) = Self::from_json_str_with_version(&text, registry, tool_version)?;
        project.project_file = path.to_path_buf();
        Ok((project, report))
    }

    /// Saves the project as indented JSON.
    pub fn to_json_string(&self) -> Result<String> {
        let mut element = Element::new();
        self.serialize_to(&mut element);
        Ok(element.to_json_string_pretty()?)
    }

    pub fn save_file(&self, path: impl AsRef<Path>) -> Result<()> {
        std::fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    // ── Properties ───────────────────────────────────────────────

    #[must_use]
    pub fn properties(&self) -> &ProjectProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ProjectProperties {
        &mut self.properties
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.properties.name
    }

    pub fn set_name(&mut self, name: &str) {
        self.properties.name = name.to_string();
    }

    #[must_use]
    pub fn first_layout(&self) -> &str {
        &self.first_layout
    }

    pub fn set_first_layout(&mut self, name: &str) {
        self.first_layout = name.to_string();
    }

    /// File the project was loaded from. Never saved in the document.
    #[must_use]
    pub fn project_file(&self) -> &Path {
        &self.project_file
    }

    pub fn set_project_file(&mut self, path: impl Into<PathBuf>) {
        self.project_file = path.into();
    }

    #[must_use]
    pub fn tool_version(&self) -> DocumentVersion {
        self.tool_version
    }

    /// Version stamped in the document this project was loaded from.
    #[must_use]
    pub fn document_version(&self) -> DocumentVersion {
        self.document_version
    }

    /// Sink receiving warnings and errors found outside of a load.
    #[must_use]
    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    // ── Platforms ────────────────────────────────────────────────

    #[must_use]
    pub fn registry(&self) -> &PlatformRegistry {
        &self.registry
    }

    /// Adds a platform. The first platform added becomes the current one.
    pub fn add_platform(&mut self, id: PlatformId) {
        if self.platforms.contains(&id) {
            return;
        }
        self.platforms.push(id);
        if self.current_platform.is_none() {
            self.current_platform = Some(id);
        }
    }

    /// Adds the registry's platform named `name`. Returns false if unknown.
    pub fn add_platform_named(&mut self, name: &str) -> bool {
        match self.registry.find(name) {
            Some(id) => {
                self.add_platform(id);
                true
            }
            None => false,
        }
    }

    /// Makes the project platform named `name` current. Does nothing if the
    /// project does not use that platform.
    pub fn set_current_platform(&mut self, name: &str) {
        if let Some(id) = self.platforms.iter().copied().find(|id| {
            self.registry
                .get(*id)
                .is_some_and(|platform| platform.name() == name)
        }) {
            self.current_platform = Some(id);
        }
    }

    /// Removes a platform from the project.
    ///
    /// The last remaining platform can't be removed. If the removed platform
    /// was current, another one becomes current.
    pub fn remove_platform(&mut self, name: &str) -> bool {
        if self.platforms.len() <= 1 {
            return false;
        }
        let Some(index) = self.platforms.iter().position(|id| {
            self.registry
                .get(*id)
                .is_some_and(|platform| platform.name() == name)
        }) else {
            return false;
        };

        let removed = self.platforms.remove(index);
        if self.current_platform == Some(removed) {
            self.current_platform = self.platforms.last().copied();
        }
        true
    }

    pub fn platforms(&self) -> impl Iterator<Item = &Platform> {
        self.platforms.iter().filter_map(|id| self.registry.get(*id))
    }

    #[must_use]
    pub fn has_platform_named(&self, name: &str) -> bool {
        self.platforms().any(|platform| platform.name() == name)
    }

    /// The platform objects are created for.
    ///
    /// A project without a current platform can't be used by a runtime;
    /// this is reported as an error each time it is asked for.
    #[must_use]
    pub fn current_platform(&self) -> Option<&Platform> {
        let platform = self.current_platform.and_then(|id| self.registry.get(id));
        if platform.is_none() {
            self.diagnostics
                .error("Project has no assigned current platform");
        }
        platform
    }

    fn current_provider(&self) -> Option<&dyn MetadataProvider> {
        self.current_platform
            .and_then(|id| self.registry.get(id))
            .map(|platform| platform as &dyn MetadataProvider)
    }

    // ── Collections ──────────────────────────────────────────────

    /// Project-wide objects.
    #[must_use]
    pub fn objects(&self) -> &ObjectsContainer {
        &self.objects
    }

    pub fn objects_mut(&mut self) -> &mut ObjectsContainer {
        &mut self.objects
    }

    #[must_use]
    pub fn resources(&self) -> &Element {
        &self.resources
    }

    #[must_use]
    pub fn variables(&self) -> &Element {
        &self.variables
    }

    #[must_use]
    pub fn layouts(&self) -> &EntityCollection<Layout> {
        &self.layouts
    }

    pub fn layouts_mut(&mut self) -> &mut EntityCollection<Layout> {
        &mut self.layouts
    }

    #[must_use]
    pub fn external_events(&self) -> &EntityCollection<ExternalEvents> {
        &self.external_events
    }

    pub fn external_events_mut(&mut self) -> &mut EntityCollection<ExternalEvents> {
        &mut self.external_events
    }

    #[must_use]
    pub fn external_layouts(&self) -> &EntityCollection<ExternalLayout> {
        &self.external_layouts
    }

    pub fn external_layouts_mut(&mut self) -> &mut EntityCollection<ExternalLayout> {
        &mut self.external_layouts
    }

    #[must_use]
    pub fn extensions(&self) -> &EntityCollection<EventsFunctionsExtension> {
        &self.extensions
    }

    pub fn extensions_mut(&mut self) -> &mut EntityCollection<EventsFunctionsExtension> {
        &mut self.extensions
    }

    // ── Events-based types ───────────────────────────────────────

    #[must_use]
    pub fn has_events_based_object(&self, object_type: &str) -> bool {
        self.events_based_object(object_type).is_some()
    }

    /// Custom object type declared by one of the project's extensions.
    #[must_use]
    pub fn events_based_object(&self, object_type: &str) -> Option<&EventsBasedObject> {
        let (extension, name) = object_type.split_once(NAMESPACE_SEPARATOR)?;
        self.extensions.get(extension)?.events_based_objects().get(name)
    }

    pub fn events_based_object_mut(&mut self, object_type: &str) -> Option<&mut EventsBasedObject> {
        let (extension, name) = object_type.split_once(NAMESPACE_SEPARATOR)?;
        self.extensions
            .get_mut(extension)?
            .events_based_objects_mut()
            .get_mut(name)
    }

    #[must_use]
    pub fn has_events_based_behavior(&self, behavior_type: &str) -> bool {
        self.events_based_behavior(behavior_type).is_some()
    }

    /// Behavior type declared by one of the project's extensions.
    #[must_use]
    pub fn events_based_behavior(&self, behavior_type: &str) -> Option<&EventsBasedBehavior> {
        let (extension, name) = behavior_type.split_once(NAMESPACE_SEPARATOR)?;
        self.extensions
            .get(extension)?
            .events_based_behaviors()
            .get(name)
    }

    // ── Objects ──────────────────────────────────────────────────

    /// Creates an object of `object_type` with the default behaviors of its
    /// type and, for custom object types, its child objects.
    #[must_use]
    pub fn create_object(&self, object_type: &str, name: &str) -> Object {
        let mut object = Object::new(name, object_type);
        if let Some(children) = self.custom_object_children(object_type) {
            object.set_children(children);
        }
        self.ensure_object_default_behaviors(&mut object);
        object
    }

    /// Reconciles the default behaviors of `object` with its type. Call it
    /// again after changing the object's type.
    pub fn ensure_object_default_behaviors(&self, object: &mut Object) {
        let is_custom_type = self.has_events_based_object(object.object_type());
        DefaultBehaviorSynchronizer::new(self.current_provider(), &self.diagnostics)
            .synchronize(object, is_custom_type);
    }

    // ── Serialization ────────────────────────────────────────────

    /// Replaces the project content with the document in `element`.
    ///
    /// Never fails: missing or malformed fields fall back to defaults, and
    /// problems are returned in the report.
    pub fn unserialize_from(&mut self, element: &Element) -> LoadReport {
        self.document_version = document_version_of(element, self.tool_version);
        info!(
            document_version = %self.document_version,
            tool_version = %self.tool_version,
            "Loading project"
        );

        let properties_element = element.child_or("properties", "Info");
        let (properties, platform_names, current_platform_name) = {
            let compat = VersionCompatibility::new(
                self.document_version,
                self.tool_version,
                &self.diagnostics,
            );
            compat.check_document_version();
            let platform_names: Vec<String> = properties_element
                .child_or("platforms", "Platforms")
                .array_items("platform", "Platform")
                .into_iter()
                .map(|platform| compat.platform_name(&platform.string_attribute("name", "")))
                .collect();
            let current = compat.platform_name(&properties_element.string_attribute("currentPlatform", ""));
            (
                ProjectProperties::unserialize_from(properties_element, &compat),
                platform_names,
                current,
            )
        };
        self.properties = properties;
        self.load_platforms(&platform_names, &current_platform_name);

        self.extensions.clear();
        let load_order =
            self.unserialize_and_insert_extensions_from(element.child("eventsFunctionsExtensions"));

        let mut objects = ObjectsContainer::new();
        objects.unserialize_from(&*self, element);
        self.objects = objects;
        self.resources = element.child_or("resources", "Resources").clone();
        self.variables = element.child_or("variables", "Variables").clone();

        self.layouts = element
            .child_or("layouts", "Scenes")
            .array_items("layout", "Scene")
            .into_iter()
            .map(|layout_element| {
                let mut layout = Layout::default();
                layout.unserialize_from(&*self, layout_element);
                layout
            })
            .collect();
        self.first_layout = element.string_attribute("firstLayout", "");

        self.external_events = element
            .child_or("externalEvents", "ExternalEvents")
            .array_items("externalEvents", "ExternalEvents")
            .into_iter()
            .map(|events_element| {
                let mut events = ExternalEvents::default();
                events.unserialize_from(events_element);
                events
            })
            .collect();

        self.external_layouts = element
            .child_or("externalLayouts", "ExternalLayouts")
            .array_items("externalLayout", "ExternalLayout")
            .into_iter()
            .map(|layout_element| {
                let mut layout = ExternalLayout::default();
                layout.unserialize_from(layout_element);
                layout
            })
            .collect();

        self.content = element.without(PROJECT_KEYS);

        let report = LoadReport {
            load_order: load_order.order,
            unresolved_extensions: load_order.unresolved,
            diagnostics: self.diagnostics.take(),
        };
        info!(
            layouts = self.layouts.len(),
            extensions = self.extensions.len(),
            warnings = report.warnings().count(),
            errors = report.errors().count(),
            "Project loaded"
        );
        report
    }

    /// Loads the extensions saved in `list` into the project, updating
    /// extensions that already exist. Returns the implementation order.
    pub fn unserialize_and_insert_extensions_from(&mut self, list: &Element) -> LoadOrder {
        let registry = Arc::clone(&self.registry);
        let provider = self
            .current_platform
            .and_then(|id| registry.get(id))
            .map(|platform| platform as &dyn MetadataProvider);
        TwoPhaseExtensionLoader::new(provider, &self.diagnostics).load(&mut self.extensions, list)
    }

    fn load_platforms(&mut self, names: &[String], current_name: &str) {
        self.platforms.clear();
        self.current_platform = None;

        for name in names {
            match self.registry.find(name) {
                Some(id) => {
                    self.add_platform(id);
                    if name == current_name || current_name.is_empty() {
                        self.current_platform = Some(id);
                    }
                }
                None => self.diagnostics.warn(format!("Platform \"{name}\" is unknown")),
            }
        }

        if names.is_empty() {
            match self.registry.find(DEFAULT_PLATFORM) {
                Some(id) => {
                    self.add_platform(id);
                    self.current_platform = Some(id);
                }
                None => self.diagnostics.warn(format!(
                    "Project lists no platform and \"{DEFAULT_PLATFORM}\" is unknown"
                )),
            }
        }

        if self.current_platform.is_none() {
            self.current_platform = self.platforms.last().copied();
        }
    }

    /// Writes the project, stamped with the tool version.
    pub fn serialize_to(&self, element: &mut Element) {
        let stamp = element.add_child("gdVersion");
        stamp.set_attribute("major", self.tool_version.major);
        stamp.set_attribute("minor", self.tool_version.minor);
        stamp.set_attribute("build", self.tool_version.build);
        stamp.set_attribute("revision", self.tool_version.revision);

        let mut properties = Element::new();
        self.properties.serialize_to(&mut properties);
        let mut platforms = Element::array();
        for id in &self.platforms {
            match self.registry.get(*id) {
                Some(platform) => {
                    platforms
                        .add_child("platform")
                        .set_attribute("name", platform.name());
                }
                None => self
                    .diagnostics
                    .error("The project has a platform which is missing from the registry"),
            }
        }
        properties.set_child("platforms", platforms);
        match self.current_platform.and_then(|id| self.registry.get(id)) {
            Some(platform) => {
                properties.set_attribute("currentPlatform", platform.name());
            }
            None => self
                .diagnostics
                .error("The project has no current platform"),
        }
        element.set_child("properties", properties);

        element.set_child("resources", self.resources.clone());
        self.objects.serialize_to(element);
        let variables = if self.variables.is_empty() {
            Element::array()
        } else {
            self.variables.clone()
        };
        element.set_child("variables", variables);

        element.set_attribute("firstLayout", self.first_layout.as_str());
        let mut layouts = Element::array();
        for layout in &self.layouts {
            layout.serialize_to(layouts.add_child("layout"));
        }
        element.set_child("layouts", layouts);

        let mut external_events = Element::array();
        for events in &self.external_events {
            events.serialize_to(external_events.add_child("externalEvents"));
        }
        element.set_child("externalEvents", external_events);

        let mut extensions = Element::array();
        for extension in &self.extensions {
            extension.serialize_to(extensions.add_child("eventsFunctionsExtension"));
        }
        element.set_child("eventsFunctionsExtensions", extensions);

        let mut external_layouts = Element::array();
        for layout in &self.external_layouts {
            layout.serialize_to(external_layouts.add_child("externalLayout"));
        }
        element.set_child("externalLayouts", external_layouts);

        element.extend_missing(&self.content);
    }
}

impl ObjectTypeContext for Project {
    fn ensure_default_behaviors(&self, object: &mut Object) {
        self.ensure_object_default_behaviors(object);
    }

    fn custom_object_children(&self, object_type: &str) -> Option<Vec<Object>> {
        self.events_based_object(object_type)
            .map(|object| object.objects().objects().iter().cloned().collect())
    }
}
