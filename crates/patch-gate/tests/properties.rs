//! Gate properties over generated documents and patches.

use patch_gate::{validate, GateResult};
use patch_gate_json_patch::Op;
use patch_gate_json_pointer::get;
use patch_gate_json_type::{ObjSchema, TypeBuilder, TypeNode};
use patch_gate_util::deep_equal;
use proptest::prelude::*;
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-z]{0,6}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(("[a-c]", inner), 0..4)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn arb_step() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-c]",
        "[0-2]",
        Just("-".to_string()),
        Just("meta".to_string()),
        Just("born".to_string()),
    ]
}

fn arb_path() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_step(), 0..4)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_path(), arb_json()).prop_map(|(path, value)| Op::Add { path, value }),
        arb_path().prop_map(|path| Op::Remove { path }),
        (arb_path(), arb_json()).prop_map(|(path, value)| Op::Replace { path, value }),
        (arb_path(), arb_path()).prop_map(|(path, from)| Op::Copy { path, from }),
        (arb_path(), arb_path()).prop_map(|(path, from)| Op::Move { path, from }),
        (arb_path(), arb_json(), any::<bool>()).prop_map(|(path, value, not)| Op::Test { path, value, not }),
    ]
}

fn open() -> ObjSchema {
    ObjSchema { unknown: Some(true) }
}

fn schema() -> TypeNode {
    let t = TypeBuilder::new();
    t.ObjectWith(
        vec![
            t.prop("a", t.any().immutable()),
            t.prop("b", t.num()),
            t.prop("meta", t.ObjectWith(vec![t.prop("born", t.any().immutable())], open())),
        ],
        open(),
    )
}

fn arb_cat() -> impl Strategy<Value = Value> {
    (arb_json(), prop::option::of(arb_json())).prop_map(|(born, extra)| {
        let mut meta = json!({"born": born});
        if let Some(extra) = extra {
            meta["a"] = extra;
        }
        json!({"a": 1, "meta": meta})
    })
}

fn changed(before: Option<&Value>, after: Option<&Value>) -> bool {
    match (before, after) {
        (Some(x), Some(y)) => !deep_equal(x, y),
        (None, None) => false,
        _ => true,
    }
}

fn run(original: &Value, ops: &[Op]) -> GateResult {
    validate(original, &schema(), ops)
}

proptest! {
    #[test]
    fn changed_immutable_fields_are_rejected(original in arb_cat(), ops in prop::collection::vec(arb_op(), 0..6)) {
        let result = run(&original, &ops);
        let value = result.value.clone().unwrap_or(Value::Null);
        for path in [vec!["a".to_string()], vec!["meta".to_string(), "born".to_string()]] {
            if changed(get(&original, &path), get(&value, &path)) {
                prop_assert!(result.error.is_some(), "{:?} changed without an error", path);
            }
        }
    }

    #[test]
    fn identical_inputs_give_identical_results(original in arb_json(), ops in prop::collection::vec(arb_op(), 0..6)) {
        prop_assert_eq!(run(&original, &ops), run(&original, &ops));
    }

    #[test]
    fn test_flag_reflects_test_operations(original in arb_json(), ops in prop::collection::vec(arb_op(), 0..6)) {
        let result = run(&original, &ops);
        prop_assert_eq!(result.test.is_some(), ops.iter().any(Op::is_test));
    }

    #[test]
    fn empty_patch_on_valid_document_is_accepted(a in arb_json(), b in any::<i32>()) {
        let original = json!({"a": a, "b": b});
        let result = run(&original, &[]);
        prop_assert!(result.is_accepted());
        prop_assert_eq!(result.value, Some(original));
    }
}
