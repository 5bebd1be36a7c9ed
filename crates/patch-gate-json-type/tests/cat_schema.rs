//! The cat schema, declared both through the builder and as JSON.

use patch_gate_json_type::{
    from_json, validate, ErrorKind, NumSchema, TypeBuilder, TypeNode, ValidationContext,
    ValidatorOptions,
};
use serde_json::{json, Value};

fn cat() -> Value {
    json!({
        "id": "k1773y",
        "name": "Cuddles",
        "description": "A cat",
        "favoriteToys": ["string"],
        "meta": {"born": 1452474481612_u64, "weight": 2.1}
    })
}

fn built_schema() -> TypeNode {
    let t = TypeBuilder::new();
    t.Object(vec![
        t.prop("id", t.str().required().immutable()),
        t.prop("name", t.str().required()),
        t.prop("description", t.str()),
        t.prop("favoriteToys", t.Array(t.str(), Default::default()).default_value(json!([]))),
        t.prop(
            "meta",
            t.Object(vec![
                t.prop("born", t.Number(NumSchema::positive().integer()).required().immutable()),
                t.prop("weight", t.num()),
            ]),
        ),
    ])
}

fn json_schema() -> TypeNode {
    from_json(&json!({
        "type": "object",
        "keys": {
            "id": {"type": "string", "required": true, "noChange": true},
            "name": {"type": "string", "required": true},
            "description": {"type": "string"},
            "favoriteToys": {"type": "array", "items": {"type": "string"}, "default": []},
            "meta": {
                "type": "object",
                "keys": {
                    "born": {"type": "number", "positive": true, "integer": true, "required": true, "noChange": true},
                    "weight": {"type": "number"}
                }
            }
        }
    }))
    .unwrap()
}

fn check(doc: &Value, schema: &TypeNode) -> patch_gate_json_type::Validated {
    let original = cat();
    validate(
        doc,
        schema,
        &ValidatorOptions::default(),
        &ValidationContext::with_original(&original),
    )
}

#[test]
fn unchanged_cat_is_valid_under_both_schemas() {
    for schema in [built_schema(), json_schema()] {
        let result = check(&cat(), &schema);
        assert!(result.is_ok(), "{:?}", result.error);
        assert_eq!(result.value, cat());
    }
}

#[test]
fn both_schemas_report_the_same_failures() {
    let mut changed_id = cat();
    changed_id["id"] = json!("f00zy");
    let mut missing_born = cat();
    missing_born["meta"].as_object_mut().unwrap().remove("born");
    let mut heavy = cat();
    heavy["meta"]["weight"] = json!("heavy");

    for doc in [changed_id, missing_born, heavy] {
        let a = check(&doc, &built_schema()).error.unwrap();
        let b = check(&doc, &json_schema()).error.unwrap();
        assert_eq!(a, b);
    }
}

#[test]
fn removed_immutable_required_field_reports_required() {
    let mut doc = cat();
    doc["meta"].as_object_mut().unwrap().remove("born");
    let err = check(&doc, &json_schema()).error.unwrap();
    assert_eq!(err.kind(), ErrorKind::RequiredFieldMissing);
    assert_eq!(
        err.message,
        "child \"meta\" fails because [child \"born\" fails because [\"born\" is required]]"
    );
    assert_eq!(err.pointer(), "/meta/born");
}

#[test]
fn changed_immutable_field_is_reported() {
    let mut doc = cat();
    doc["id"] = json!("string");
    let err = check(&doc, &json_schema()).error.unwrap();
    assert_eq!(err.kind(), ErrorKind::ImmutableFieldChanged);
    assert_eq!(err.message, "child \"id\" fails because [\"id\" is not allowed to be changed]");
}

#[test]
fn missing_toys_get_the_default() {
    let mut doc = cat();
    doc.as_object_mut().unwrap().remove("favoriteToys");
    let result = check(&doc, &json_schema());
    assert!(result.is_ok());
    assert_eq!(result.value["favoriteToys"], json!([]));
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let mut doc = cat();
    doc["owner"] = json!("someone");
    let err = check(&doc, &json_schema()).error.unwrap();
    assert_eq!(err.kind(), ErrorKind::TypeOrConstraintViolation);
    assert_eq!(err.message, "\"owner\" is not allowed");
}
