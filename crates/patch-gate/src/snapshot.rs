use patch_gate_util::deep_clone;
use serde_json::Value;

/// Returns an independent deep copy of `original`.
///
/// Object key order and array order are preserved exactly. A
/// `serde_json::Value` is a tree, so the copy is always finite and every
/// node in it is owned by the copy.
pub fn snapshot(original: &Value) -> Value {
    deep_clone(original)
}
