use gamedoc_model::{Behavior, NamedEntity, NullTypeContext, Object, ObjectTypeContext, ObjectsContainer};
use gamedoc_serial::Element;
use pretty_assertions::assert_eq;
use serde_json::json;

fn element(json: serde_json::Value) -> Element {
    Element::from_json(&json)
}

// ── Behaviors ────────────────────────────────────────────────────

#[test]
fn insert_behavior_replaces_same_name() {
    let mut object = Object::new("Player", "Sprite");
    object.insert_behavior(Behavior::new("Move", "Platformer::Character"));
    object.insert_behavior(Behavior::new("Move", "TopDown::Movement"));
    assert_eq!(object.behavior_names(), vec!["Move".to_string()]);
    assert_eq!(object.behavior("Move").unwrap().type_name(), "TopDown::Movement");
}

#[test]
fn remove_behavior() {
    let mut object = Object::new("Player", "Sprite");
    object.insert_behavior(Behavior::new("Move", "Platformer::Character"));
    assert!(object.remove_behavior("Move").is_some());
    assert!(!object.has_behavior_named("Move"));
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn unserialize_reads_behaviors_and_keeps_content() {
    let saved = element(json!({
        "name": "Player",
        "type": "Sprite",
        "variables": [],
        "animations": [{"name": "Idle"}],
        "behaviors": [
            {"name": "Move", "type": "Platformer::Character", "speed": 300},
            {"name": "Effect", "type": "EffectCapability::EffectBehavior", "isDefaultBehavior": true}
        ]
    }));
    let object = Object::unserialize_from(&NullTypeContext, &saved);
    assert_eq!(object.name(), "Player");
    assert_eq!(object.object_type(), "Sprite");
    assert!(!object.behavior("Move").unwrap().is_default_behavior());
    assert_eq!(
        object.behavior("Move").unwrap().properties().int_attribute("speed", 0),
        300
    );
    assert!(object.behavior("Effect").unwrap().is_default_behavior());
    assert!(object.content().has_child("animations"));
}

#[test]
fn serialize_roundtrip_is_equivalent() {
    let saved = json!({
        "name": "Player",
        "type": "Sprite",
        "animations": [{"name": "Idle"}],
        "behaviors": [
            {"name": "Effect", "type": "EffectCapability::EffectBehavior", "isDefaultBehavior": true},
            {"name": "Move", "type": "Platformer::Character", "speed": 300}
        ]
    });
    let object = Object::unserialize_from(&NullTypeContext, &element(saved.clone()));
    let mut out = Element::new();
    object.serialize_to(&mut out);
    assert_eq!(out.to_json(), saved);
}

// ── Context ──────────────────────────────────────────────────────

struct ButtonContext;

impl ObjectTypeContext for ButtonContext {
    fn ensure_default_behaviors(&self, object: &mut Object) {
        if object.object_type() == "Sprite" && !object.has_behavior_named("Effect") {
            let mut behavior = Behavior::new("Effect", "EffectCapability::EffectBehavior");
            behavior.set_default_behavior(true);
            object.insert_behavior(behavior);
        }
    }

    fn custom_object_children(&self, object_type: &str) -> Option<Vec<Object>> {
        (object_type == "UI::Button").then(|| vec![Object::new("Label", "TextObject::Text")])
    }
}

#[test]
fn context_adds_default_behaviors() {
    let object = Object::unserialize_from(&ButtonContext, &element(json!({"name": "A", "type": "Sprite"})));
    assert!(object.behavior("Effect").unwrap().is_default_behavior());
}

#[test]
fn context_materializes_custom_children() {
    let object = Object::unserialize_from(&ButtonContext, &element(json!({"name": "Ok", "type": "UI::Button"})));
    assert_eq!(object.children().len(), 1);
    assert_eq!(object.children()[0].name(), "Label");
}

#[test]
fn children_are_not_serialized() {
    let object = Object::unserialize_from(&ButtonContext, &element(json!({"name": "Ok", "type": "UI::Button"})));
    let mut out = Element::new();
    object.serialize_to(&mut out);
    assert_eq!(out.to_json(), json!({"name": "Ok", "type": "UI::Button", "behaviors": []}));
}

// ── Container ────────────────────────────────────────────────────

#[test]
fn container_reads_legacy_keys() {
    let parent = element(json!({
        "Objects": [{"name": "A", "type": "Sprite"}],
        "ObjectGroups": [{"name": "Enemies"}]
    }));
    let mut container = ObjectsContainer::new();
    container.unserialize_from(&NullTypeContext, &parent);
    assert_eq!(container.objects().len(), 1);
    assert_eq!(container.groups().children_count(), 1);
    assert!(container.folders().is_none());

    let mut out = Element::new();
    container.serialize_to(&mut out);
    assert!(out.has_child("objects"));
    assert!(out.has_child("objectsGroups"));
    assert!(!out.has_child("Objects"));
}

#[test]
fn container_keeps_folder_structure_when_present() {
    let parent = element(json!({
        "objects": [],
        "objectsGroups": [],
        "objectsFolderStructure": {"folderName": "__ROOT", "children": []}
    }));
    let mut container = ObjectsContainer::new();
    container.unserialize_from(&NullTypeContext, &parent);
    let mut out = Element::new();
    container.serialize_to(&mut out);
    assert_eq!(out.to_json(), parent.to_json());
}
