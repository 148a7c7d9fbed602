//! Scalar project properties.

use crate::compat::{VersionCompatibility, ZERO_AS_DEFAULT_Z_ORDER};
use gamedoc_serial::Element;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Keys of the `properties` element read by [`ProjectProperties`] or by the
/// project itself (platforms).
const PROPERTY_KEYS: &[&str] = &[
    "name",
    "Nom",
    "description",
    "version",
    "author",
    "Auteur",
    "authorIds",
    "authorUsernames",
    "categories",
    "playableDevices",
    "packageName",
    "templateSlug",
    "orientation",
    "folderProject",
    "latestCompilationDirectory",
    "LatestCompilationDirectory",
    "windowWidth",
    "WindowW",
    "windowHeight",
    "WindowH",
    "maxFPS",
    "FPSmax",
    "minFPS",
    "FPSmin",
    "verticalSync",
    "scaleMode",
    "pixelsRounding",
    "adaptGameResolutionAtRuntime",
    "sizeOnStartupMode",
    "antialiasingMode",
    "antialisingEnabledOnMobile",
    "projectUuid",
    "useDeprecatedZeroAsDefaultZOrder",
    "extensionProperties",
    "adMobAppId",
    "platformSpecificAssets",
    "loadingScreen",
    "watermark",
    "sceneResourcesPreloading",
    "sceneResourcesUnloading",
    "platforms",
    "Platforms",
    "currentPlatform",
];

const DEFAULT_SCENE_RESOURCES_PRELOADING: &str = "at-startup";
const DEFAULT_SCENE_RESOURCES_UNLOADING: &str = "never";

/// Per-extension property values, set by users in the project settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtensionProperties {
    values: BTreeMap<String, BTreeMap<String, String>>,
}

impl ExtensionProperties {
    #[must_use]
    pub fn value(&self, extension: &str, property: &str) -> Option<&str> {
        self.values
            .get(extension)
            .and_then(|properties| properties.get(property))
            .map(String::as_str)
    }

    pub fn set_value(&mut self, extension: &str, property: &str, value: &str) {
        self.values
            .entry(extension.to_string())
            .or_default()
            .insert(property.to_string(), value.to_string());
    }

    pub fn remove_value(&mut self, extension: &str, property: &str) -> Option<String> {
        let properties = self.values.get_mut(extension)?;
        let removed = properties.remove(property);
        if properties.is_empty() {
            self.values.remove(extension);
        }
        removed
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn unserialize_from(element: &Element) -> Self {
        let mut properties = Self::default();
        for entry in element.array_items("", "") {
            properties.set_value(
                &entry.string_attribute("extension", ""),
                &entry.string_attribute("property", ""),
                &entry.string_attribute("value", ""),
            );
        }
        properties
    }

    fn serialize_to(&self) -> Element {
        let mut list = Element::array();
        for (extension, properties) in &self.values {
            for (property, value) in properties {
                let entry = list.add_child("");
                entry.set_attribute("extension", extension.as_str());
                entry.set_attribute("property", property.as_str());
                entry.set_attribute("value", value.as_str());
            }
        }
        list
    }
}

/// Everything in the project's `properties` element except the platforms.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectProperties {
    pub name: String,
    pub description: String,
    pub version: String,
    pub author: String,
    pub author_ids: Vec<String>,
    pub author_usernames: Vec<String>,
    pub categories: Vec<String>,
    pub playable_with_keyboard: bool,
    pub playable_with_gamepad: bool,
    pub playable_with_mobile: bool,
    pub package_name: String,
    pub template_slug: String,
    pub orientation: String,
    pub folder_project: bool,
    pub latest_compilation_directory: String,
    pub window_width: u32,
    pub window_height: u32,
    pub max_fps: u32,
    pub min_fps: u32,
    pub vertical_sync: bool,
    pub scale_mode: String,
    pub pixels_rounding: bool,
    pub adapt_game_resolution_at_runtime: bool,
    pub size_on_startup_mode: String,
    pub antialiasing_mode: String,
    pub antialiasing_enabled_on_mobile: bool,
    pub project_uuid: String,
    pub use_deprecated_zero_as_default_z_order: bool,
    pub extension_properties: ExtensionProperties,
    pub platform_specific_assets: Element,
    pub loading_screen: Element,
    pub watermark: Element,
    pub scene_resources_preloading: String,
    pub scene_resources_unloading: String,
    content: Element,
}

impl Default for ProjectProperties {
    fn default() -> Self {
        Self {
            name: "Project".to_string(),
            description: String::new(),
            version: "1.0.0".to_string(),
            author: String::new(),
            author_ids: Vec::new(),
            author_usernames: Vec::new(),
            categories: Vec::new(),
            playable_with_keyboard: false,
            playable_with_gamepad: false,
            playable_with_mobile: false,
            package_name: "com.example.gamename".to_string(),
            template_slug: String::new(),
            orientation: "landscape".to_string(),
            folder_project: false,
            latest_compilation_directory: String::new(),
            window_width: 800,
            window_height: 600,
            max_fps: 60,
            min_fps: 20,
            vertical_sync: false,
            scale_mode: "linear".to_string(),
            pixels_rounding: false,
            adapt_game_resolution_at_runtime: true,
            size_on_startup_mode: "adaptWidth".to_string(),
            antialiasing_mode: "MSAA".to_string(),
            antialiasing_enabled_on_mobile: false,
            project_uuid: String::new(),
            use_deprecated_zero_as_default_z_order: false,
            extension_properties: ExtensionProperties::default(),
            platform_specific_assets: Element::new(),
            loading_screen: Element::new(),
            watermark: Element::new(),
            scene_resources_preloading: DEFAULT_SCENE_RESOURCES_PRELOADING.to_string(),
            scene_resources_unloading: DEFAULT_SCENE_RESOURCES_UNLOADING.to_string(),
            content: Element::new(),
        }
    }
}

fn u32_attribute(element: &Element, name: &str, legacy: &str, default: u32) -> u32 {
    u32::try_from(element.int_attribute_aliased(name, legacy, i64::from(default)))
        .unwrap_or(default)
}

fn string_list(element: &Element) -> Vec<String> {
    element
        .array_items("", "")
        .into_iter()
        .map(Element::string_value)
        .collect()
}

fn string_list_element<'a>(values: impl IntoIterator<Item = &'a str>) -> Element {
    let mut list = Element::array();
    for value in values {
        list.add_child("").set_value(value);
    }
    list
}

impl ProjectProperties {
    /// Replaces the project UUID with a fresh random one.
    pub fn reset_project_uuid(&mut self) {
        self.project_uuid = Uuid::new_v4().to_string();
    }

    pub(crate) fn unserialize_from(element: &Element, compat: &VersionCompatibility<'_>) -> Self {
        let defaults = Self::default();
        let mut properties = Self {
            name: element.string_attribute_aliased("name", "Nom", ""),
            description: element.string_attribute("description", ""),
            version: element.string_attribute("version", &defaults.version),
            author: element.string_attribute_aliased("author", "Auteur", ""),
            author_ids: string_list(element.child("authorIds")),
            author_usernames: string_list(element.child("authorUsernames")),
            categories: string_list(element.child("categories")),
            package_name: element.string_attribute("packageName", ""),
            template_slug: element.string_attribute("templateSlug", ""),
            orientation: element.string_attribute("orientation", "default"),
            folder_project: element.bool_attribute("folderProject", false),
            latest_compilation_directory: element.string_attribute_aliased(
                "latestCompilationDirectory",
                "LatestCompilationDirectory",
                "",
            ),
            window_width: u32_attribute(element, "windowWidth", "WindowW", defaults.window_width),
            window_height: u32_attribute(element, "windowHeight", "WindowH", defaults.window_height),
            max_fps: u32_attribute(element, "maxFPS", "FPSmax", defaults.max_fps),
            min_fps: u32_attribute(element, "minFPS", "FPSmin", defaults.min_fps),
            vertical_sync: element.bool_attribute("verticalSync", false),
            scale_mode: element.string_attribute("scaleMode", &defaults.scale_mode),
            pixels_rounding: element.bool_attribute("pixelsRounding", false),
            adapt_game_resolution_at_runtime: element
                .bool_attribute("adaptGameResolutionAtRuntime", false),
            size_on_startup_mode: element.string_attribute("sizeOnStartupMode", ""),
            antialiasing_mode: element.string_attribute("antialiasingMode", &defaults.antialiasing_mode),
            antialiasing_enabled_on_mobile: element
                .bool_attribute("antialisingEnabledOnMobile", false),
            project_uuid: element.string_attribute("projectUuid", ""),
            use_deprecated_zero_as_default_z_order: compat
                .bool_property(&ZERO_AS_DEFAULT_Z_ORDER, element),
            extension_properties: ExtensionProperties::unserialize_from(
                element.child("extensionProperties"),
            ),
            platform_specific_assets: element.child("platformSpecificAssets").clone(),
            loading_screen: element.child("loadingScreen").clone(),
            watermark: element.child("watermark").clone(),
            scene_resources_preloading: element.string_attribute(
                "sceneResourcesPreloading",
                DEFAULT_SCENE_RESOURCES_PRELOADING,
            ),
            scene_resources_unloading: element.string_attribute(
                "sceneResourcesUnloading",
                DEFAULT_SCENE_RESOURCES_UNLOADING,
            ),
            content: element.without(PROPERTY_KEYS),
            ..defaults
        };

        for device in string_list(element.child("playableDevices")) {
            match device.as_str() {
                "keyboard" => properties.playable_with_keyboard = true,
                "gamepad" => properties.playable_with_gamepad = true,
                "mobile" => properties.playable_with_mobile = true,
                _ => {}
            }
        }

        if !element.has_child("projectUuid") {
            properties.reset_project_uuid();
        }

        let ad_mob_app_id = element.string_attribute("adMobAppId", "");
        if !ad_mob_app_id.is_empty() {
            properties
                .extension_properties
                .set_value("AdMob", "AdMobAppId", &ad_mob_app_id);
        }

        properties
    }

    pub(crate) fn serialize_to(&self, element: &mut Element) {
        element.set_attribute("name", self.name.as_str());
        element.set_attribute("description", self.description.as_str());
        element.set_attribute("version", self.version.as_str());
        element.set_attribute("author", self.author.as_str());
        element.set_attribute("windowWidth", self.window_width);
        element.set_attribute("windowHeight", self.window_height);
        element.set_attribute(
            "latestCompilationDirectory",
            self.latest_compilation_directory.as_str(),
        );
        element.set_attribute("maxFPS", self.max_fps);
        element.set_attribute("minFPS", self.min_fps);
        element.set_attribute("verticalSync", self.vertical_sync);
        element.set_attribute("scaleMode", self.scale_mode.as_str());
        element.set_attribute("pixelsRounding", self.pixels_rounding);
        element.set_attribute(
            "adaptGameResolutionAtRuntime",
            self.adapt_game_resolution_at_runtime,
        );
        element.set_attribute("sizeOnStartupMode", self.size_on_startup_mode.as_str());
        element.set_attribute("antialiasingMode", self.antialiasing_mode.as_str());
        element.set_attribute(
            "antialisingEnabledOnMobile",
            self.antialiasing_enabled_on_mobile,
        );
        element.set_attribute("projectUuid", self.project_uuid.as_str());
        element.set_attribute("folderProject", self.folder_project);
        element.set_attribute("packageName", self.package_name.as_str());
        element.set_attribute("templateSlug", self.template_slug.as_str());
        element.set_attribute("orientation", self.orientation.as_str());
        element.set_child("platformSpecificAssets", self.platform_specific_assets.clone());
        element.set_child("loadingScreen", self.loading_screen.clone());
        element.set_child("watermark", self.watermark.clone());

        element.set_child(
            "authorIds",
            string_list_element(self.author_ids.iter().map(String::as_str)),
        );
        element.set_child(
            "authorUsernames",
            string_list_element(self.author_usernames.iter().map(String::as_str)),
        );
        element.set_child(
            "categories",
            string_list_element(self.categories.iter().map(String::as_str)),
        );
        let devices = [
            (self.playable_with_keyboard, "keyboard"),
            (self.playable_with_gamepad, "gamepad"),
            (self.playable_with_mobile, "mobile"),
        ];
        element.set_child(
            "playableDevices",
            string_list_element(
                devices
                    .into_iter()
                    .filter_map(|(playable, device)| playable.then_some(device)),
            ),
        );

        if self.use_deprecated_zero_as_default_z_order {
            element.set_attribute("useDeprecatedZeroAsDefaultZOrder", true);
        }
        element.set_child("extensionProperties", self.extension_properties.serialize_to());

        if self.scene_resources_preloading != DEFAULT_SCENE_RESOURCES_PRELOADING {
            element.set_attribute(
                "sceneResourcesPreloading",
                self.scene_resources_preloading.as_str(),
            );
        }
        if self.scene_resources_unloading != DEFAULT_SCENE_RESOURCES_UNLOADING {
            element.set_attribute(
                "sceneResourcesUnloading",
                self.scene_resources_unloading.as_str(),
            );
        }

        element.extend_missing(&self.content);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_properties_roundtrip() {
        let mut properties = ExtensionProperties::default();
        properties.set_value("AdMob", "AdMobAppId", "ca-app-pub-1");
        properties.set_value("AdMob", "Testing", "true");
        let restored = ExtensionProperties::unserialize_from(&properties.serialize_to());
        assert_eq!(restored, properties);
        assert_eq!(restored.value("AdMob", "Testing"), Some("true"));
    }

    #[test]
    fn removing_last_value_removes_extension() {
        let mut properties = ExtensionProperties::default();
        properties.set_value("AdMob", "AdMobAppId", "x");
        assert_eq!(
            properties.remove_value("AdMob", "AdMobAppId").as_deref(),
            Some("x")
        );
        assert!(properties.is_empty());
    }
}
