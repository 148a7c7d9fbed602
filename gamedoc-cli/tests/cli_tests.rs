use gamedoc_cli::{inspect, load_order, load_registry, resave};
use gamedoc_project::{Project, Severity};
use gamedoc_types::DocumentVersion;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use std::path::{Path, PathBuf};

fn write_json(dir: &Path, name: &str, value: &Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).unwrap();
    path
}

fn extension(name: &str, object: &str, child_type: &str) -> Value {
    json!({
        "name": name,
        "eventsFunctions": [],
        "eventsBasedBehaviors": [],
        "eventsBasedObjects": [{
            "name": object,
            "objects": [{"name": "child", "type": child_type, "behaviors": []}],
            "variants": []
        }]
    })
}

fn sample_project() -> Value {
    json!({
        "gdVersion": {"major": 4, "minor": 0, "build": 90, "revision": 0},
        "properties": {
            "name": "Sample",
            "projectUuid": "11111111-1111-4111-8111-111111111111",
            "platforms": [{"name": "GDevelop JS platform"}],
            "currentPlatform": "GDevelop JS platform"
        },
        "firstLayout": "Level",
        "layouts": [{
            "name": "Level",
            "objects": [{"name": "Hero", "type": "Sprite", "behaviors": []}]
        }],
        "eventsFunctionsExtensions": [
            extension("Menus", "Button", "Widgets::Label"),
            extension("Widgets", "Label", "TextObject::Text")
        ]
    })
}

// ── Registry ─────────────────────────────────────────────────────

#[test]
fn explicit_registry_file_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("registry.toml");
    std::fs::write(&path, "[[platform]]\nname = \"Only platform\"\n").unwrap();

    let registry = load_registry(Some(&path)).unwrap();
    assert_eq!(registry.len(), 1);
    assert!(registry.platform_named("Only platform").is_some());
}

#[test]
fn missing_registry_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_registry(Some(&dir.path().join("absent.toml"))).unwrap_err();
    assert!(error.to_string().contains("absent.toml"));
}

// ── Subcommands ──────────────────────────────────────────────────

#[test]
fn inspect_summarizes_the_project() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(dir.path(), "game.json", &sample_project());

    let summary = inspect(&path, load_registry(None).unwrap(), DocumentVersion::CURRENT).unwrap();
    assert_eq!(summary.name, "Sample");
    assert_eq!(summary.document_version, "4.0.90.0");
    assert_eq!(summary.current_platform.as_deref(), Some("GDevelop JS platform"));
    assert_eq!(summary.layouts, vec!["Level"]);
    assert_eq!(summary.extensions, vec!["Menus", "Widgets"]);
    assert_eq!(summary.load_order, vec!["Widgets", "Menus"]);
    assert!(summary.diagnostics.iter().all(|d| d.severity != Severity::Error));
}

#[test]
fn load_order_lists_dependencies_first() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_json(dir.path(), "game.json", &sample_project());

    let order = load_order(&path, load_registry(None).unwrap(), DocumentVersion::CURRENT).unwrap();
    assert_eq!(order.order, vec!["Widgets", "Menus"]);
    assert!(order.unresolved.is_empty());
}

#[test]
fn resave_stamps_tool_version_and_upgrades_fields() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "game.json", &sample_project());
    let output = dir.path().join("upgraded.json");
    let tool = DocumentVersion::new(4, 1, 2, 0);

    resave(&input, &output, load_registry(None).unwrap(), tool).unwrap();

    let saved: Value = serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        saved["gdVersion"],
        json!({"major": 4, "minor": 1, "build": 2, "revision": 0})
    );
    assert_eq!(saved["properties"]["useDeprecatedZeroAsDefaultZOrder"], json!(true));

    let hero = &saved["layouts"][0]["objects"][0];
    let behavior_names: Vec<&str> = hero["behaviors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|behavior| behavior["name"].as_str().unwrap())
        .collect();
    assert!(behavior_names.contains(&"Effect"));
    assert!(behavior_names.contains(&"Opacity"));
}

#[test]
fn resaved_project_loads_identically() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_json(dir.path(), "game.json", &sample_project());
    let first = dir.path().join("first.json");
    let second = dir.path().join("second.json");
    let registry = load_registry(None).unwrap();

    resave(&input, &first, registry.clone(), DocumentVersion::CURRENT).unwrap();
    resave(&first, &second, registry.clone(), DocumentVersion::CURRENT).unwrap();

    let read = |path: &Path| -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    };
    assert_eq!(read(&first), read(&second));

    let (project, _) = Project::load_file(&second, registry, DocumentVersion::CURRENT).unwrap();
    let label = project.events_based_object("Menus::Button").unwrap();
    let child = label.objects().objects().get("child").unwrap();
    assert_eq!(child.children().len(), 1);
}

#[test]
fn unreadable_project_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ nope").unwrap();

    let error = inspect(&path, load_registry(None).unwrap(), DocumentVersion::CURRENT).unwrap_err();
    assert!(error.to_string().contains("broken.json"));
}
