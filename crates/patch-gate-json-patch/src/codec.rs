//! JSON codec for JSON Patch operations.
//!
//! Converts operations to and from their RFC 6902 `serde_json::Value` form.

use patch_gate_json_pointer::{format_json_pointer, parse_json_pointer, Path};
use serde_json::{json, Map, Value};

use crate::types::{Op, PatchError};

// ── Path helpers ──────────────────────────────────────────────────────────

fn encode_path(path: &[String]) -> Value {
    Value::String(format_json_pointer(path))
}

fn decode_path(map: &Map<String, Value>, field: &str) -> Result<Path, PatchError> {
    let pointer = map
        .get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp(format!("\"{field}\" must be a string")))?;
    Ok(parse_json_pointer(pointer))
}

fn decode_value(map: &Map<String, Value>) -> Result<Value, PatchError> {
    map.get("value")
        .cloned()
        .ok_or_else(|| PatchError::InvalidOp("missing \"value\"".into()))
}

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize an `Op` to its JSON Patch form.
pub fn to_json(op: &Op) -> Value {
    match op {
        Op::Add { path, value } => json!({
            "op": "add",
            "path": encode_path(path),
            "value": value
        }),
        Op::Remove { path } => json!({ "op": "remove", "path": encode_path(path) }),
        Op::Replace { path, value } => json!({
            "op": "replace",
            "path": encode_path(path),
            "value": value
        }),
        Op::Copy { path, from } => json!({
            "op": "copy",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Move { path, from } => json!({
            "op": "move",
            "path": encode_path(path),
            "from": encode_path(from)
        }),
        Op::Test { path, value, not } => {
            let mut m = Map::new();
            m.insert("op".into(), json!("test"));
            m.insert("path".into(), encode_path(path));
            m.insert("value".into(), value.clone());
            if *not {
                m.insert("not".into(), json!(true));
            }
            Value::Object(m)
        }
    }
}

/// Serialize a patch to a JSON array.
pub fn to_json_patch(ops: &[Op]) -> Value {
    Value::Array(ops.iter().map(to_json).collect())
}

// ── Deserialization ───────────────────────────────────────────────────────

/// Deserialize one operation.
///
/// Unknown members are ignored, as RFC 6902 requires.
pub fn from_json(v: &Value) -> Result<Op, PatchError> {
    let map = v
        .as_object()
        .ok_or_else(|| PatchError::InvalidOp("operation must be an object".into()))?;
    let op_name = map
        .get("op")
        .and_then(Value::as_str)
        .ok_or_else(|| PatchError::InvalidOp("missing \"op\"".into()))?;
    let path = decode_path(map, "path")?;

    match op_name {
        "add" => Ok(Op::Add {
            path,
            value: decode_value(map)?,
        }),
        "remove" => Ok(Op::Remove { path }),
        "replace" => Ok(Op::Replace {
            path,
            value: decode_value(map)?,
        }),
        "copy" => Ok(Op::Copy {
            path,
            from: decode_path(map, "from")?,
        }),
        "move" => Ok(Op::Move {
            path,
            from: decode_path(map, "from")?,
        }),
        "test" => Ok(Op::Test {
            path,
            value: decode_value(map)?,
            not: map.get("not").and_then(Value::as_bool).unwrap_or(false),
        }),
        other => Err(PatchError::InvalidOp(format!("unknown op: {other}"))),
    }
}

/// Deserialize a JSON array of operations.
pub fn from_json_patch(v: &Value) -> Result<Vec<Op>, PatchError> {
    v.as_array()
        .ok_or_else(|| PatchError::InvalidOp("patch must be an array".into()))?
        .iter()
        .map(from_json)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_rfc6902_operations() {
        let ops = from_json_patch(&json!([
            {"op": "add", "path": "/description", "value": "My fuzzy kitten"},
            {"op": "remove", "path": "/favoriteToys/0"},
            {"op": "replace", "path": "/meta/born", "value": 1452474481612_u64},
            {"op": "copy", "from": "/favoriteToys/0", "path": "/id"},
            {"op": "move", "from": "/meta/foo", "path": "/id"},
            {"op": "test", "path": "/meta/born", "value": "??"}
        ]))
        .unwrap();
        assert_eq!(
            ops.iter().map(Op::op_name).collect::<Vec<_>>(),
            ["add", "remove", "replace", "copy", "move", "test"]
        );
        assert_eq!(ops[3].from(), Some(&vec!["favoriteToys".to_string(), "0".to_string()]));
    }

    #[test]
    fn encode_escapes_paths() {
        let op = Op::Copy {
            path: vec!["a/b".into()],
            from: vec!["m~n".into()],
        };
        assert_eq!(
            to_json(&op),
            json!({"op": "copy", "path": "/a~1b", "from": "/m~0n"})
        );
    }

    #[test]
    fn test_not_flag_survives_encoding() {
        let op = from_json(&json!({"op": "test", "path": "/a", "value": 1, "not": true})).unwrap();
        assert_eq!(to_json(&op)["not"], json!(true));
        let plain = from_json(&json!({"op": "test", "path": "/a", "value": 1})).unwrap();
        assert!(to_json(&plain).get("not").is_none());
    }

    #[test]
    fn decode_errors() {
        assert!(matches!(from_json(&json!(1)), Err(PatchError::InvalidOp(_))));
        assert!(matches!(
            from_json(&json!({"op": "add", "path": "/a"})),
            Err(PatchError::InvalidOp(m)) if m.contains("value")
        ));
        assert!(matches!(
            from_json(&json!({"op": "copy", "path": "/a"})),
            Err(PatchError::InvalidOp(m)) if m.contains("from")
        ));
        assert!(matches!(
            from_json(&json!({"op": "flip", "path": "/a"})),
            Err(PatchError::InvalidOp(m)) if m == "unknown op: flip"
        ));
        assert!(from_json_patch(&json!({})).is_err());
    }

    #[test]
    fn null_value_is_a_value() {
        let op = from_json(&json!({"op": "add", "path": "/a", "value": null})).unwrap();
        assert_eq!(op, Op::Add { path: vec!["a".into()], value: Value::Null });
    }
}
