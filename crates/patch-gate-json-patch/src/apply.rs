//! JSON Patch apply logic.

use patch_gate_json_pointer::{
    array_index, format_json_pointer, get, get_mut, is_child, split_last, JsonPointerError,
};
use patch_gate_util::{deep_clone, deep_equal};
use serde_json::Value;
use tracing::{debug, trace};

use super::types::{ApplyReport, Op, OpFailure, PatchError, PatchResult, TestOutcome};

impl From<JsonPointerError> for PatchError {
    fn from(err: JsonPointerError) -> Self {
        match err {
            JsonPointerError::InvalidIndex => PatchError::InvalidIndex,
            JsonPointerError::NotFound => PatchError::NotFound,
            JsonPointerError::NoParent => PatchError::InvalidTarget,
        }
    }
}

/// Mutable navigation to the container holding the last step of `path`.
fn parent_mut<'a>(doc: &'a mut Value, path: &'a [String]) -> Result<(&'a mut Value, &'a str), PatchError> {
    let (parent_path, key) = split_last(path)?;
    let parent = get_mut(doc, parent_path).ok_or(PatchError::NotFound)?;
    Ok((parent, key))
}

// ── Individual operation applicators ─────────────────────────────────────

fn apply_add(doc: &mut Value, path: &[String], value: Value) -> Result<Option<Value>, PatchError> {
    if path.is_empty() {
        return Ok(Some(std::mem::replace(doc, value)));
    }
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => Ok(map.insert(key.to_string(), value)),
        Value::Array(arr) => {
            let idx = array_index(key, arr.len())?;
            if idx > arr.len() {
                return Err(PatchError::NotFound);
            }
            arr.insert(idx, value);
            Ok(None)
        }
        _ => Err(PatchError::NotFound),
    }
}

fn apply_remove(doc: &mut Value, path: &[String]) -> Result<Value, PatchError> {
    if path.is_empty() {
        return Err(PatchError::InvalidTarget);
    }
    let (parent, key) = parent_mut(doc, path)?;
    match parent {
        Value::Object(map) => map.shift_remove(key).ok_or(PatchError::NotFound),
        Value::Array(arr) => {
            let idx = array_index(key, arr.len())?;
            if idx >= arr.len() {
                return Err(PatchError::NotFound);
            }
            Ok(arr.remove(idx))
        }
        _ => Err(PatchError::NotFound),
    }
}

fn apply_replace(doc: &mut Value, path: &[String], value: Value) -> Result<Value, PatchError> {
    let target = get_mut(doc, path).ok_or(PatchError::NotFound)?;
    Ok(std::mem::replace(target, value))
}

fn apply_copy(doc: &mut Value, path: &[String], from: &[String]) -> Result<Option<Value>, PatchError> {
    let src = get(doc, from).map(deep_clone).ok_or(PatchError::NotFound)?;
    apply_add(doc, path, src)
}

fn apply_move(doc: &mut Value, path: &[String], from: &[String]) -> Result<Option<Value>, PatchError> {
    if is_child(from, path) {
        return Err(PatchError::InvalidTarget);
    }
    if get(doc, from).is_none() {
        return Err(PatchError::NotFound);
    }
    if from == path {
        return Ok(None);
    }
    check_move_target(doc, path, from)?;
    let value = apply_remove(doc, from)?;
    apply_add(doc, path, value)
}

/// Checks, before anything is removed, that `add` at `path` will succeed
/// once the value at `from` is gone. `path` is in post-removal terms, so
/// indices into the array `from` is removed from are shifted back by one.
fn check_move_target(doc: &Value, path: &[String], from: &[String]) -> Result<(), PatchError> {
    let Ok((parent_path, key)) = split_last(path) else {
        return Ok(());
    };
    let (from_parent, from_key) = split_last(from)?;
    let mut lookup = parent_path.to_vec();
    let mut shrinks = false;
    if let Some(Value::Array(arr)) = get(doc, from_parent) {
        let removed = array_index(from_key, arr.len())?;
        let depth = from_parent.len();
        if lookup.len() > depth && lookup[..depth] == *from_parent {
            if let Ok(i) = array_index(&lookup[depth], arr.len()) {
                if i >= removed {
                    lookup[depth] = (i + 1).to_string();
                }
            }
        }
        shrinks = parent_path == from_parent;
    }
    match get(doc, &lookup).ok_or(PatchError::NotFound)? {
        Value::Object(_) => Ok(()),
        Value::Array(arr) => {
            let len = if shrinks { arr.len() - 1 } else { arr.len() };
            if array_index(key, len)? > len {
                return Err(PatchError::NotFound);
            }
            Ok(())
        }
        _ => Err(PatchError::NotFound),
    }
}

/// Evaluates a `test` operation against `doc` without mutating it.
///
/// A path that does not resolve fails the test, with or without `not`.
pub fn test_value(doc: &Value, path: &[String], value: &Value, not: bool) -> bool {
    match get(doc, path) {
        Some(actual) => deep_equal(actual, value) != not,
        None => false,
    }
}

// ── Main apply functions ──────────────────────────────────────────────────

/// Apply a single operation to the document in place.
///
/// Returns the value displaced at `path`, if any. A failing `test` yields
/// `PatchError::Test`; a failed operation leaves `doc` as it was.
pub fn apply_op(doc: &mut Value, op: &Op) -> Result<Option<Value>, PatchError> {
    match op {
        Op::Add { path, value } => apply_add(doc, path, value.clone()),
        Op::Remove { path } => apply_remove(doc, path).map(Some),
        Op::Replace { path, value } => apply_replace(doc, path, value.clone()).map(Some),
        Op::Copy { path, from } => apply_copy(doc, path, from),
        Op::Move { path, from } => apply_move(doc, path, from),
        Op::Test { path, value, not } => {
            if test_value(doc, path, value, *not) {
                Ok(None)
            } else {
                Err(PatchError::Test)
            }
        }
    }
}

/// Apply a sequence of operations, stopping at the first failure.
pub fn apply_ops(mut doc: Value, ops: &[Op]) -> Result<PatchResult, PatchError> {
    let mut old = Vec::with_capacity(ops.len());
    for op in ops {
        old.push(apply_op(&mut doc, op)?);
    }
    Ok(PatchResult { doc, old })
}

/// Apply every operation in order and report what happened.
///
/// Unlike [`apply_ops`], nothing aborts the run: a `test` records its
/// outcome and never mutates the document, and a failing non-test
/// operation is skipped and recorded in [`ApplyReport::failures`]. Each
/// operation sees the effects of all earlier successful ones.
pub fn apply_and_report(mut doc: Value, ops: &[Op]) -> ApplyReport {
    let mut failures = Vec::new();
    let mut tests = Vec::new();
    for (index, op) in ops.iter().enumerate() {
        if let Op::Test { path, value, not } = op {
            let passed = test_value(&doc, path, value, *not);
            if !passed {
                debug!(index, path = %format_json_pointer(path), "test operation failed");
            }
            tests.push(TestOutcome { index, passed });
            continue;
        }
        match apply_op(&mut doc, op) {
            Ok(_) => trace!(index, op = op.op_name(), path = %format_json_pointer(op.path()), "applied"),
            Err(error) => {
                debug!(
                    index,
                    op = op.op_name(),
                    path = %format_json_pointer(op.path()),
                    %error,
                    "operation skipped"
                );
                failures.push(OpFailure {
                    index,
                    op: op.clone(),
                    error,
                });
            }
        }
    }
    ApplyReport {
        doc,
        failures,
        tests,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
