use serde_json::Value;

use crate::{is_valid_index, JsonPointerError};

/// Decodes an array index token against an array of length `len`.
///
/// `-` refers to the slot one past the end. Any other token must be a
/// canonical non-negative integer; it is not bounds-checked here.
pub fn array_index(step: &str, len: usize) -> Result<usize, JsonPointerError> {
    if step == "-" {
        return Ok(len);
    }
    if !is_valid_index(step) {
        return Err(JsonPointerError::InvalidIndex);
    }
    step.parse().map_err(|_| JsonPointerError::InvalidIndex)
}

/// Get a value from a JSON document by path.
///
/// Returns `None` when any step does not resolve, including `-` and
/// out-of-range indices.
pub fn get<'a>(val: &'a Value, path: &[String]) -> Option<&'a Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => arr.get(array_index(step, arr.len()).ok()?)?,
            Value::Object(map) => map.get(step)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value in a JSON document by path.
pub fn get_mut<'a>(val: &'a mut Value, path: &[String]) -> Option<&'a mut Value> {
    let mut current = val;
    for step in path {
        current = match current {
            Value::Array(arr) => {
                let idx = array_index(step, arr.len()).ok()?;
                arr.get_mut(idx)?
            }
            Value::Object(map) => map.get_mut(step)?,
            _ => return None,
        };
    }
    Some(current)
}
