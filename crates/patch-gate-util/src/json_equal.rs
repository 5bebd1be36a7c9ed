//! Structural equality for JSON documents.

use serde_json::{Number, Value};

/// Performs a deep equality check between two JSON values.
///
/// Arrays compare element by element, objects key by key regardless of
/// insertion order. Numbers compare by numeric value, so `1` and `1.0` are
/// equal even though `serde_json` stores them differently.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use patch_gate_util::deep_equal;
///
/// assert!(deep_equal(&json!({"a": 1, "b": [2]}), &json!({"b": [2], "a": 1.0})));
/// assert!(!deep_equal(&json!({"a": 1}), &json!({"a": "1"})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => numbers_equal(a, b),
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(k, v)| b.get(k).is_some_and(|bv| deep_equal(v, bv)))
        }
        _ => false,
    }
}

/// Compares two JSON numbers by value.
///
/// Integers are compared exactly; only when either side is a float does the
/// comparison fall back to `f64`.
pub fn numbers_equal(a: &Number, b: &Number) -> bool {
    if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64()) {
        return x == y;
    }
    if let (Some(x), Some(y)) = (a.as_u64(), b.as_u64()) {
        return x == y;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert!(deep_equal(&json!(null), &json!(null)));
        assert!(deep_equal(&json!("a"), &json!("a")));
        assert!(!deep_equal(&json!("a"), &json!("b")));
        assert!(!deep_equal(&json!(true), &json!(false)));
    }

    #[test]
    fn type_mismatches_are_never_equal() {
        assert!(!deep_equal(&json!(1), &json!(true)));
        assert!(!deep_equal(&json!(0), &json!(null)));
        assert!(!deep_equal(&json!(""), &json!(null)));
        assert!(!deep_equal(&json!({}), &json!([])));
        assert!(!deep_equal(&json!(1452474481612_u64), &json!("??")));
    }

    #[test]
    fn numbers_compare_by_value() {
        assert!(deep_equal(&json!(1), &json!(1.0)));
        assert!(deep_equal(&json!(1452474481612_u64), &json!(1452474481612_i64)));
        assert!(!deep_equal(&json!(2.1), &json!(2)));
        assert!(!deep_equal(&json!(u64::MAX), &json!(-1)));
    }

    #[test]
    fn objects_ignore_key_order() {
        assert!(deep_equal(
            &json!({"a": 1, "b": "2"}),
            &json!({"b": "2", "a": 1})
        ));
        assert!(!deep_equal(
            &json!({"a": 1, "b": "2"}),
            &json!({"a": 1, "b": "2", "c": []})
        ));
        assert!(!deep_equal(&json!({"a": 1}), &json!({"b": 1})));
    }

    #[test]
    fn arrays_are_positional() {
        assert!(deep_equal(&json!([1, [2, {"x": 3}]]), &json!([1, [2, {"x": 3}]])));
        assert!(!deep_equal(&json!([1, 2]), &json!([2, 1])));
        assert!(!deep_equal(&json!([1, 2, 3]), &json!([1, 2])));
    }
}
