//! Multi-operation patches decoded from their wire form.

use patch_gate_json_patch::{apply_and_report, apply_ops, from_json_patch, PatchError};
use serde_json::{json, Value};

fn cat() -> Value {
    json!({
        "id": "k1773y",
        "name": "Cuddles",
        "favoriteToys": ["string"],
        "meta": {"born": 1452474481612_u64, "weight": 2.1}
    })
}

#[test]
fn later_operations_see_earlier_effects() {
    let ops = from_json_patch(&json!([
        {"op": "add", "path": "/favoriteToys/-", "value": "mouse"},
        {"op": "move", "from": "/favoriteToys/0", "path": "/favoriteToys/-"},
        {"op": "copy", "from": "/favoriteToys/0", "path": "/best"},
        {"op": "test", "path": "/best", "value": "mouse"}
    ]))
    .unwrap();
    let result = apply_ops(cat(), &ops).unwrap();
    assert_eq!(result.doc["favoriteToys"], json!(["mouse", "string"]));
    assert_eq!(result.doc["best"], json!("mouse"));
}

#[test]
fn copy_into_existing_field_overwrites_it() {
    let ops = from_json_patch(&json!([
        {"op": "copy", "from": "/favoriteToys/0", "path": "/id"}
    ]))
    .unwrap();
    let report = apply_and_report(cat(), &ops);
    assert!(report.failures.is_empty());
    assert_eq!(report.doc["id"], json!("string"));
}

#[test]
fn move_from_missing_field_is_reported_and_skipped() {
    let ops = from_json_patch(&json!([
        {"op": "move", "from": "/meta/foo", "path": "/id"},
        {"op": "replace", "path": "/name", "value": "Fluffy"}
    ]))
    .unwrap();
    let report = apply_and_report(cat(), &ops);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].error, PatchError::NotFound);
    assert_eq!(report.doc["id"], json!("k1773y"));
    assert_eq!(report.doc["name"], json!("Fluffy"));
}

#[test]
fn tests_do_not_mutate() {
    let ops = from_json_patch(&json!([
        {"op": "test", "path": "/meta/born", "value": 1452474481612_u64},
        {"op": "test", "path": "/meta/born", "value": "??"}
    ]))
    .unwrap();
    let report = apply_and_report(cat(), &ops);
    assert_eq!(report.doc, cat());
    assert_eq!(report.test(), Some(false));
    assert!(report.tests[0].passed);
    assert!(!report.tests[1].passed);
}

#[test]
fn out_of_range_index_versus_in_range() {
    let remove = |i: usize| from_json_patch(&json!([{"op": "remove", "path": format!("/favoriteToys/{i}")}])).unwrap();

    let ok = apply_and_report(cat(), &remove(0));
    assert!(ok.failures.is_empty());
    assert_eq!(ok.doc["favoriteToys"], json!([]));

    let missing = apply_and_report(cat(), &remove(2));
    assert_eq!(missing.failures[0].error, PatchError::NotFound);
    assert!(missing.failures[0].error.is_path_error());
    assert_eq!(missing.doc, cat());
}
