//! JSON Patch operation validator.
//!
//! Validates raw operations (as `serde_json::Value` maps) before decoding,
//! so callers can reject untrusted input early.

use patch_gate_json_pointer::{parse_json_pointer, validate_json_pointer, validate_path};
use serde_json::{Map, Value};

// ── Error ──────────────────────────────────────────────────────────────────

/// Error returned by validation functions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for ValidationError {}

fn err(msg: &str) -> ValidationError {
    ValidationError(msg.to_string())
}

// ── Public API ─────────────────────────────────────────────────────────────

/// Validate a list of operations.
///
/// Errors include the index of the failing operation:
/// `"Error in operation [index = N] (reason)."`.
pub fn validate_operations(ops: &Value) -> Result<(), ValidationError> {
    let arr = ops.as_array().ok_or_else(|| err("Not a array."))?;
    if arr.is_empty() {
        return Err(err("Empty operation patch."));
    }
    for (i, op) in arr.iter().enumerate() {
        validate_operation(op).map_err(|e| {
            ValidationError(format!("Error in operation [index = {}] ({}).", i, e.0))
        })?;
    }
    Ok(())
}

/// Validate a single operation object.
pub fn validate_operation(op: &Value) -> Result<(), ValidationError> {
    let map = op.as_object().ok_or_else(|| err("OP_INVALID"))?;

    let path_str = map
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| err("OP_PATH_INVALID"))?;
    validate_json_pointer_str(path_str)?;

    match map.get("op").and_then(Value::as_str).unwrap_or("") {
        "add" | "replace" => validate_has_value(map),
        "remove" => Ok(()),
        "copy" => validate_from(map).map(|_| ()),
        "move" => {
            let from = validate_from(map)?;
            if path_str.starts_with(&format!("{from}/")) {
                return Err(err("Cannot move into own children."));
            }
            Ok(())
        }
        "test" => {
            validate_has_value(map)?;
            validate_not_field(map)
        }
        _ => Err(err("OP_UNKNOWN")),
    }
}

// ── Field validators ───────────────────────────────────────────────────────

fn validate_has_value(map: &Map<String, Value>) -> Result<(), ValidationError> {
    if !map.contains_key("value") {
        return Err(err("OP_VALUE_MISSING"));
    }
    Ok(())
}

fn validate_from(map: &Map<String, Value>) -> Result<&str, ValidationError> {
    let from = map
        .get("from")
        .and_then(Value::as_str)
        .ok_or_else(|| err("OP_FROM_INVALID"))?;
    validate_json_pointer_str(from)?;
    Ok(from)
}

fn validate_not_field(map: &Map<String, Value>) -> Result<(), ValidationError> {
    match map.get("not") {
        Some(not_val) if !not_val.is_boolean() => Err(err("Invalid \"not\" modifier.")),
        _ => Ok(()),
    }
}

fn validate_json_pointer_str(s: &str) -> Result<(), ValidationError> {
    validate_json_pointer(s)
        .and_then(|()| validate_path(&parse_json_pointer(s)))
        .map_err(|e| err(&e.to_string()))
}

// ── Tests ─────────────────────────────────────────────────────────────────
