//! The validation gate: snapshot, apply, validate, combine.

use patch_gate_json_patch::{apply_and_report, from_json_patch, validate_operations, Op};
use patch_gate_json_type::{TypeNode, ValidationContext};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::GateError;
use crate::options::GateOptions;
use crate::snapshot::snapshot;

/// Outcome of one gate call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GateResult {
    /// The patched document as the validator returned it. `None` only when
    /// the JSON entry point could not decode its input.
    pub value: Option<Value>,
    /// First patch failure, otherwise the first schema violation.
    pub error: Option<GateError>,
    /// `None` without `test` operations, otherwise whether all passed.
    pub test: Option<bool>,
}

impl GateResult {
    /// No error and no failed `test`.
    pub fn is_accepted(&self) -> bool {
        self.error.is_none() && self.test != Some(false)
    }

    fn rejected(error: GateError) -> Self {
        Self {
            value: None,
            error: Some(error),
            test: None,
        }
    }
}

/// Validates `ops` applied to `original` against `schema` with default
/// options.
pub fn validate(original: &Value, schema: &TypeNode, ops: &[Op]) -> GateResult {
    validate_with(original, schema, ops, &GateOptions::default())
}

/// Validates `ops` applied to `original` against `schema`.
///
/// `original` is only read; the operations run on a snapshot.
pub fn validate_with(original: &Value, schema: &TypeNode, ops: &[Op], opts: &GateOptions) -> GateResult {
    let report = apply_and_report(snapshot(original), ops);
    let test = report.test();

    let ctx = ValidationContext::with_original(original);
    let validated = patch_gate_json_type::validate(&report.doc, schema, &opts.validator, &ctx);

    let error = match report.first_failure() {
        Some(failure) => Some(GateError::from(failure)),
        None => validated.error.map(|violation| {
            debug!(code = %violation.code, "schema violation");
            GateError::from(violation)
        }),
    };
    match &error {
        Some(err) => debug!(kind = ?err.kind, path = %err.path, message = %err.message, "mutation rejected"),
        None => debug!(ops = ops.len(), ?test, "mutation accepted"),
    }

    GateResult {
        value: Some(validated.value),
        error,
        test,
    }
}

/// [`validate_json_with`] with default options.
pub fn validate_json(original: &Value, schema: &Value, patch: &Value) -> GateResult {
    validate_json_with(original, schema, patch, &GateOptions::default())
}

/// Wire-level entry point: `schema` is a schema description (see
/// [`patch_gate_json_type::from_json`]) and `patch` an RFC 6902 operation
/// array. Undecodable input yields `InvalidSchema` or `InvalidPatch` with
/// no value.
pub fn validate_json_with(original: &Value, schema: &Value, patch: &Value, opts: &GateOptions) -> GateResult {
    let schema = match patch_gate_json_type::from_json(schema) {
        Ok(schema) => schema,
        Err(err) => return GateResult::rejected(err.into()),
    };
    if opts.strict_patch {
        if let Err(err) = validate_operations(patch) {
            return GateResult::rejected(err.into());
        }
    }
    let ops = match from_json_patch(patch) {
        Ok(ops) => ops,
        Err(err) => return GateResult::rejected(err.into()),
    };
    validate_with(original, &schema, &ops, opts)
}
