//! Platform registry, optionally loaded from `registry.toml`.

use crate::{BehaviorMetadata, ObjectMetadata, Platform, Result};
use gamedoc_serial::Element;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Handle to a platform inside a [`PlatformRegistry`].
///
/// Handles stay valid for the registry's lifetime: platforms are never
/// removed once registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlatformId(usize);

/// Every platform known to the running tool.
#[derive(Debug, Clone, Default)]
pub struct PlatformRegistry {
    platforms: Vec<Platform>,
    source_path: Option<PathBuf>,
}

impl PlatformRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a registry from `path`.
    ///
    /// A missing file gives an empty registry. So does an unreadable or
    /// malformed one, with a warning.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!("No registry file found at {:?}, no platform available", path);
            return Self::default();
        }

        let mut registry = match Self::read_from(path) {
            Ok(registry) => {
                info!(
                    platforms = registry.len(),
                    "Loaded platform registry from {:?}", path
                );
                registry
            }
            Err(e) => {
                warn!(
                    "Failed to load registry file {:?}: {}. Falling back to an empty registry.",
                    path, e
                );
                Self::default()
            }
        };
        registry.source_path = Some(path.to_path_buf());
        registry
    }

    /// Reads and parses `path`, failing instead of falling back.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses a registry from TOML text.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: RegistryFile = toml::from_str(contents)?;
        let mut registry = Self::default();
        for platform in file.platform {
            registry.register(platform.into_platform());
        }
        Ok(registry)
    }

    /// File this registry was loaded from, if any.
    #[must_use]
    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Adds `platform`. A platform with the same name is replaced in place
    /// and keeps its handle.
    pub fn register(&mut self, platform: Platform) -> PlatformId {
        if let Some(id) = self.find(platform.name()) {
            self.platforms[id.0] = platform;
            return id;
        }
        self.platforms.push(platform);
        PlatformId(self.platforms.len() - 1)
    }

    #[must_use]
    pub fn find(&self, name: &str) -> Option<PlatformId> {
        self.platforms
            .iter()
            .position(|platform| platform.name() == name)
            .map(PlatformId)
    }

    #[must_use]
    pub fn get(&self, id: PlatformId) -> Option<&Platform> {
        self.platforms.get(id.0)
    }

    #[must_use]
    pub fn platform_named(&self, name: &str) -> Option<&Platform> {
        self.find(name).and_then(|id| self.get(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlatformId, &Platform)> {
        self.platforms
            .iter()
            .enumerate()
            .map(|(index, platform)| (PlatformId(index), platform))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}

// ── TOML file format ─────────────────────────────────────────────

#[derive(Deserialize, Default)]
struct RegistryFile {
    #[serde(default)]
    platform: Vec<PlatformSection>,
}

#[derive(Deserialize)]
struct PlatformSection {
    name: String,
    #[serde(default)]
    object: Vec<ObjectSection>,
    #[serde(default)]
    behavior: Vec<BehaviorSection>,
}

#[derive(Deserialize)]
struct ObjectSection {
    #[serde(rename = "type")]
    object_type: String,
    #[serde(default, rename = "default-behaviors")]
    default_behaviors: Vec<String>,
}

#[derive(Deserialize)]
struct BehaviorSection {
    #[serde(rename = "type")]
    behavior_type: String,
    #[serde(rename = "default-name")]
    default_name: String,
    #[serde(default)]
    properties: Element,
}

impl PlatformSection {
    fn into_platform(self) -> Platform {
        let mut platform = Platform::new(&self.name);
        for object in self.object {
            let mut metadata = ObjectMetadata::new(&object.object_type);
            for behavior_type in &object.default_behaviors {
                metadata.add_default_behavior(behavior_type);
            }
            platform.add_object(metadata);
        }
        for behavior in self.behavior {
            platform.add_behavior(
                BehaviorMetadata::new(&behavior.behavior_type, &behavior.default_name)
                    .with_default_properties(behavior.properties),
            );
        }
        platform
    }
}
