//! Structural deep copy of JSON documents.

use serde_json::{Map, Value};

/// Creates a deep, reference-independent copy of a JSON document.
///
/// Object key order and array order are preserved exactly. The returned
/// value owns every node, so mutating it can never be observed through
/// `value` (and vice versa).
///
/// `serde_json::Value` is an owned tree and cannot hold cycles, so there is
/// no failure mode for well-formed input.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use patch_gate_util::deep_clone;
///
/// let original = json!({"meta": {"born": 1452474481612_u64}, "toys": ["string"]});
/// let mut copy = deep_clone(&original);
/// copy["toys"].as_array_mut().unwrap().clear();
///
/// assert_eq!(original["toys"], json!(["string"]));
/// ```
pub fn deep_clone(value: &Value) -> Value {
    match value {
        Value::Null => Value::Null,
        Value::Bool(b) => Value::Bool(*b),
        Value::Number(n) => Value::Number(n.clone()),
        Value::String(s) => Value::String(s.clone()),
        Value::Array(arr) => {
            let mut out = Vec::with_capacity(arr.len());
            out.extend(arr.iter().map(deep_clone));
            Value::Array(out)
        }
        Value::Object(obj) => {
            let mut out = Map::with_capacity(obj.len());
            for (key, val) in obj {
                out.insert(key.clone(), deep_clone(val));
            }
            Value::Object(out)
        }
    }
}
