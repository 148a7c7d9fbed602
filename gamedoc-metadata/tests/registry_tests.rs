use gamedoc_metadata::{MetadataError, MetadataProvider, Platform, PlatformRegistry};
use pretty_assertions::assert_eq;
use serde_json::json;

const REGISTRY: &str = r#"
[[platform]]
name = "GDevelop JS platform"

[[platform.object]]
type = "Sprite"
default-behaviors = [
    "EffectCapability::EffectBehavior",
    "OpacityCapability::OpacityBehavior",
    "EffectCapability::EffectBehavior",
]

[[platform.object]]
type = "TextObject::Text"

[[platform.behavior]]
type = "EffectCapability::EffectBehavior"
default-name = "Effect"

[[platform.behavior]]
type = "OpacityCapability::OpacityBehavior"
default-name = "Opacity"

[platform.behavior.properties]
opacity = 255

[[platform]]
name = "GDevelop C++ platform"
"#;

/// Helper: write TOML content to a temp file and load via `load_from`.
fn load_registry_from_str(contents: &str) -> PlatformRegistry {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(&path, contents).unwrap();
    PlatformRegistry::load_from(&path)
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parses_platforms_objects_and_behaviors() {
    let registry = PlatformRegistry::from_toml_str(REGISTRY).unwrap();
    assert_eq!(registry.len(), 2);

    let js = registry.platform_named("GDevelop JS platform").unwrap();
    let sprite = js.object_metadata("Sprite").unwrap();
    assert_eq!(
        sprite.default_behaviors(),
        ["EffectCapability::EffectBehavior", "OpacityCapability::OpacityBehavior"]
    );
    assert!(js.object_metadata("TextObject::Text").unwrap().default_behaviors().is_empty());
    assert!(js.object_metadata("Unknown").is_none());

    let opacity = js.behavior_metadata("OpacityCapability::OpacityBehavior").unwrap();
    assert_eq!(opacity.default_name(), "Opacity");
    assert_eq!(opacity.default_properties().to_json(), json!({"opacity": 255}));
}

#[test]
fn from_toml_str_reports_errors() {
    let err = PlatformRegistry::from_toml_str("[[platform]]\nname = 3").unwrap_err();
    assert!(matches!(err, MetadataError::Toml(_)));
}

#[test]
fn empty_file_is_empty_registry() {
    assert!(PlatformRegistry::from_toml_str("").unwrap().is_empty());
}

// ── Loading from disk ────────────────────────────────────────────

#[test]
fn load_from_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let registry = PlatformRegistry::load_from(dir.path().join("nonexistent.toml"));
    assert!(registry.is_empty());
    assert!(registry.source_path().is_none());
}

#[test]
fn load_from_file() {
    let registry = load_registry_from_str(REGISTRY);
    assert_eq!(registry.len(), 2);
    assert!(registry.source_path().is_some());
}

#[test]
fn load_from_malformed_file_falls_back_to_empty() {
    let registry = load_registry_from_str("this is [not toml");
    assert!(registry.is_empty());
    assert!(registry.source_path().is_some());
}

#[test]
fn read_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = PlatformRegistry::read_from(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, MetadataError::Io(_)));
}

// ── Handles ──────────────────────────────────────────────────────

#[test]
fn register_same_name_keeps_handle() {
    let mut registry = PlatformRegistry::new();
    let first = registry.register(Platform::new("A"));
    let other = registry.register(Platform::new("B"));
    let again = registry.register(Platform::new("A"));
    assert_eq!(first, again);
    assert_ne!(first, other);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.get(first).map(Platform::name), Some("A"));
    assert_eq!(registry.find("C"), None);
}

#[test]
fn iter_in_registration_order() {
    let registry = PlatformRegistry::from_toml_str(REGISTRY).unwrap();
    let names: Vec<&str> = registry.iter().map(|(_, platform)| platform.name()).collect();
    assert_eq!(names, vec!["GDevelop JS platform", "GDevelop C++ platform"]);
}
