//! Shared fixtures for project tests.

#![allow(dead_code)]

use gamedoc_metadata::PlatformRegistry;
use gamedoc_project::{LoadReport, Project};
use gamedoc_serial::Element;
use serde_json::{Value, json};
use std::sync::Arc;

pub const JS_PLATFORM: &str = "GDevelop JS platform";
pub const CPP_PLATFORM: &str = "GDevelop C++ platform";

pub const REGISTRY: &str = r#"
[[platform]]
name = "GDevelop JS platform"

[[platform.object]]
type = "Sprite"
default-behaviors = ["EffectCapability::EffectBehavior", "OpacityCapability::OpacityBehavior"]

[[platform.object]]
type = "TextObject::Text"
default-behaviors = ["EffectCapability::EffectBehavior"]

[[platform.object]]
type = "Broken"
default-behaviors = ["Missing::Behavior"]

[[platform.behavior]]
type = "EffectCapability::EffectBehavior"
default-name = "Effect"

[[platform.behavior]]
type = "OpacityCapability::OpacityBehavior"
default-name = "Opacity"

[platform.behavior.properties]
opacity = 255

[[platform.behavior]]
type = "PlatformBehavior::PlatformerObjectBehavior"
default-name = "PlatformerObject"

[[platform]]
name = "GDevelop C++ platform"

[[platform.object]]
type = "Sprite"
default-behaviors = ["EffectCapability::EffectBehavior"]

[[platform.behavior]]
type = "EffectCapability::EffectBehavior"
default-name = "Effect"
"#;

pub fn registry() -> Arc<PlatformRegistry> {
    Arc::new(PlatformRegistry::from_toml_str(REGISTRY).unwrap())
}

pub fn element(json: Value) -> Element {
    Element::from_json(&json)
}

/// Loads `json` as a project with the fixture registry.
pub fn load(json: Value) -> (Project, LoadReport) {
    let mut project = Project::new(registry());
    let report = project.unserialize_from(&element(json));
    (project, report)
}

pub fn messages(report: &LoadReport) -> Vec<String> {
    report.diagnostics.iter().map(|d| d.message.clone()).collect()
}

/// An extension declaring one events-based object per `(name, child objects)` entry.
pub fn extension(name: &str, objects: &[(&str, Value)]) -> Value {
    let objects: Vec<Value> = objects
        .iter()
        .map(|(object_name, children)| {
            json!({
                "name": object_name,
                "fullName": object_name,
                "defaultName": object_name,
                "objects": children,
                "objectsGroups": [],
                "eventsFunctions": [],
                "variants": []
            })
        })
        .collect();
    json!({
        "name": name,
        "namespace": "",
        "version": "1.0.0",
        "fullName": name,
        "description": "",
        "eventsFunctions": [{"name": "Helper", "functionType": "Action", "events": []}],
        "eventsBasedBehaviors": [],
        "eventsBasedObjects": objects
    })
}

pub fn object(name: &str, object_type: &str) -> Value {
    json!({"name": name, "type": object_type, "behaviors": []})
}

/// A minimal project document targeting the JS platform.
pub fn project_json(extensions: Vec<Value>) -> Value {
    json!({
        "gdVersion": {"major": 4, "minor": 1, "build": 0, "revision": 0},
        "properties": {
            "name": "Fixture",
            "projectUuid": "00000000-0000-4000-8000-000000000000",
            "platforms": [{"name": JS_PLATFORM}],
            "currentPlatform": JS_PLATFORM
        },
        "resources": {"resources": [], "resourceFolders": []},
        "objects": [],
        "objectsGroups": [],
        "variables": [],
        "layouts": [],
        "externalEvents": [],
        "eventsFunctionsExtensions": extensions,
        "externalLayouts": []
    })
}
