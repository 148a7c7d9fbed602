mod common;

use common::{extension, load, messages, object, project_json};
use gamedoc_model::{NamedEntity, Object};
use gamedoc_project::Severity;
use gamedoc_serial::Element;
use pretty_assertions::assert_eq;
use serde_json::json;

fn child_names(object: &Object) -> Vec<&str> {
    object.children().iter().map(|child| child.name()).collect()
}

/// `A::Foo` embeds a `B::Bar`, which embeds a text object.
fn nested_extensions() -> Vec<serde_json::Value> {
    vec![
        extension("A", &[("Foo", json!([object("bar", "B::Bar")]))]),
        extension("B", &[("Bar", json!([object("Label", "TextObject::Text")]))]),
    ]
}

// ── Ordering ─────────────────────────────────────────────────────

#[test]
fn dependencies_are_implemented_first() {
    let (_, report) = load(project_json(nested_extensions()));
    assert_eq!(report.load_order, vec!["B", "A"]);
    assert!(report.unresolved_extensions.is_empty());
}

#[test]
fn extensions_keep_document_order_in_collection() {
    let (project, _) = load(project_json(nested_extensions()));
    assert_eq!(project.extensions().names(), vec!["A", "B"]);
}

#[test]
fn nested_custom_object_is_complete() {
    let (project, report) = load(project_json(nested_extensions()));
    let foo = project.events_based_object("A::Foo").unwrap();
    let bar = foo.objects().objects().get("bar").unwrap();
    assert_eq!(child_names(bar), vec!["Label"]);
    assert!(!report.has_errors());
}

#[test]
fn custom_object_type_gets_no_unknown_type_warning() {
    let (_, report) = load(project_json(nested_extensions()));
    assert!(messages(&report).iter().all(|m| !m.contains("unknown type")));
}

#[test]
fn implementation_is_read_for_every_extension() {
    let (project, _) = load(project_json(nested_extensions()));
    for extension in project.extensions() {
        assert_eq!(extension.events_functions().names(), vec!["Helper"]);
    }
}

#[test]
fn child_objects_get_default_behaviors() {
    let (project, _) = load(project_json(nested_extensions()));
    let bar = project.events_based_object("B::Bar").unwrap();
    let label = bar.objects().objects().get("Label").unwrap();
    assert!(label.behavior("Effect").unwrap().is_default_behavior());
}

#[test]
fn scene_objects_of_custom_types_get_children() {
    let mut document = project_json(nested_extensions());
    document["layouts"] = json!([{"name": "Level", "objects": [object("Widget", "A::Foo")]}]);
    let (project, _) = load(document);

    let scene = project.layouts().get("Level").unwrap();
    let widget = scene.objects().objects().get("Widget").unwrap();
    assert_eq!(child_names(widget), vec!["bar"]);
    assert_eq!(child_names(&widget.children()[0]), vec!["Label"]);
}

#[test]
fn dependency_cycle_loads_in_document_order() {
    let (project, report) = load(project_json(vec![
        extension("A", &[("Foo", json!([object("bar", "B::Bar")]))]),
        extension("B", &[("Bar", json!([object("foo", "A::Foo")]))]),
    ]));
    assert_eq!(report.load_order, vec!["A", "B"]);
    assert_eq!(report.unresolved_extensions, vec!["A", "B"]);
    assert!(report.warnings().any(|w| w.message.contains("dependency cycle")));
    assert_eq!(project.extensions().len(), 2);
}

#[test]
fn duplicate_extension_is_loaded_once() {
    let (project, report) = load(project_json(vec![
        extension("A", &[("Foo", json!([]))]),
        extension("A", &[("Foo", json!([]))]),
    ]));
    assert_eq!(project.extensions().len(), 1);
    assert_eq!(report.load_order, vec!["A"]);
}

// ── Variants ─────────────────────────────────────────────────────

fn with_variant(mut extension: serde_json::Value, object_index: usize) -> serde_json::Value {
    extension["eventsBasedObjects"][object_index]["variants"] = json!([{
        "name": "Big",
        "objects": [object("bigBar", "B::Bar")],
        "objectsGroups": [],
        "instances": []
    }]);
    extension
}

#[test]
fn variants_are_loaded_with_complete_children() {
    let extensions = vec![
        with_variant(extension("A", &[("Foo", json!([]))]), 0),
        extension("B", &[("Bar", json!([object("Label", "TextObject::Text")]))]),
    ];
    let (project, report) = load(project_json(extensions));
    assert_eq!(report.load_order, vec!["B", "A"]);

    let foo = project.events_based_object("A::Foo").unwrap();
    let big = foo.variants().get("Big").unwrap();
    let big_bar = big.objects().objects().get("bigBar").unwrap();
    assert_eq!(child_names(big_bar), vec!["Label"]);
}

#[test]
fn variants_survive_redeclaration() {
    let extensions = vec![
        with_variant(extension("A", &[("Foo", json!([]))]), 0),
        extension("B", &[("Bar", json!([object("Label", "TextObject::Text")]))]),
    ];
    let (mut project, _) = load(project_json(extensions));

    let reloaded = Element::from_json(&json!([extension("A", &[("Foo", json!([]))])]));
    let order = project.unserialize_and_insert_extensions_from(&reloaded);
    assert_eq!(order.order, vec!["A"]);

    let foo = project.events_based_object("A::Foo").unwrap();
    assert_eq!(foo.variants().names(), vec!["Big"]);
    let big_bar = foo.variants().get("Big").unwrap().objects().objects().get("bigBar").unwrap();
    assert_eq!(child_names(big_bar), vec!["Label"]);
    assert_eq!(project.extensions().len(), 2);
}

/// `A::Foo` has a variant embedding `C::Bar`, which embeds `A::Baz`.
fn cyclic_extensions_with_variant() -> Vec<serde_json::Value> {
    let mut a = extension(
        "A",
        &[("Foo", json!([])), ("Baz", json!([object("Body", "Sprite")]))],
    );
    a["eventsBasedObjects"][0]["variants"] = json!([{
        "name": "Big",
        "objects": [object("bigBar", "C::Bar")],
        "objectsGroups": [],
        "instances": []
    }]);
    let c = extension("C", &[("Bar", json!([object("baz", "A::Baz")]))]);
    vec![a, c]
}

#[test]
fn variants_are_completed_when_reloading_a_cycle() {
    let (mut project, _) = load(project_json(cyclic_extensions_with_variant()));

    let reloaded = Element::from_json(&json!(cyclic_extensions_with_variant()));
    let order = project.unserialize_and_insert_extensions_from(&reloaded);
    assert_eq!(order.order, vec!["A", "C"]);
    assert_eq!(order.unresolved, vec!["A", "C"]);

    let foo = project.events_based_object("A::Foo").unwrap();
    let big_bar = foo.variants().get("Big").unwrap().objects().objects().get("bigBar").unwrap();
    assert_eq!(big_bar.object_type(), "C::Bar");
    assert_eq!(child_names(big_bar), vec!["baz"]);
    assert_eq!(child_names(&big_bar.children()[0]), vec!["Body"]);
}

#[test]
fn variants_of_removed_object_are_dropped_with_warning() {
    let extensions = vec![with_variant(extension("A", &[("Foo", json!([]))]), 0)];
    let (mut project, _) = load(project_json(extensions));

    let reloaded = Element::from_json(&json!([extension("A", &[("Other", json!([]))])]));
    project.unserialize_and_insert_extensions_from(&reloaded);

    assert!(!project.has_events_based_object("A::Foo"));
    let reported = project.diagnostics().take();
    assert!(reported.iter().any(|d| d.severity == Severity::Warning && d.message.contains("Foo")));
}
