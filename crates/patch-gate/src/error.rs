//! Gate error taxonomy.

use patch_gate_json_patch::{OpFailure, PatchError};
use patch_gate_json_pointer::format_json_pointer;
use patch_gate_json_type::{SchemaError, Violation};
use serde::Serialize;
use thiserror::Error;

/// Category of a rejected mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    /// A non-test operation's `path` or `from` did not resolve.
    PathNotFound,
    /// A `test` operation failed. Reported through `GateResult::test`, never
    /// as the gate error.
    TestMismatch,
    RequiredFieldMissing,
    ImmutableFieldChanged,
    TypeOrConstraintViolation,
    /// A malformed or structurally impossible operation.
    InvalidPatch,
    /// The schema description could not be decoded.
    InvalidSchema,
}

impl From<patch_gate_json_type::ErrorKind> for ErrorKind {
    fn from(kind: patch_gate_json_type::ErrorKind) -> Self {
        use patch_gate_json_type::ErrorKind as K;
        match kind {
            K::RequiredFieldMissing => ErrorKind::RequiredFieldMissing,
            K::ImmutableFieldChanged => ErrorKind::ImmutableFieldChanged,
            K::TypeOrConstraintViolation => ErrorKind::TypeOrConstraintViolation,
        }
    }
}

impl From<&PatchError> for ErrorKind {
    fn from(err: &PatchError) -> Self {
        match err {
            PatchError::NotFound | PatchError::InvalidIndex => ErrorKind::PathNotFound,
            PatchError::Test => ErrorKind::TestMismatch,
            PatchError::InvalidTarget | PatchError::InvalidOp(_) => ErrorKind::InvalidPatch,
        }
    }
}

/// The first reason a mutation was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
pub struct GateError {
    pub kind: ErrorKind,
    pub message: String,
    /// JSON Pointer of the offending location; empty for the document root
    /// and for errors not tied to a location.
    pub path: String,
}

impl GateError {
    pub fn new(kind: ErrorKind, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            path: path.into(),
        }
    }
}

impl From<Violation> for GateError {
    fn from(v: Violation) -> Self {
        let path = v.pointer();
        Self::new(v.kind().into(), v.message, path)
    }
}

impl From<&OpFailure> for GateError {
    fn from(failure: &OpFailure) -> Self {
        let reason = match &failure.error {
            PatchError::NotFound => "path not found".to_string(),
            PatchError::InvalidIndex => "invalid array index".to_string(),
            PatchError::InvalidTarget => "invalid target".to_string(),
            PatchError::Test => "test failed".to_string(),
            PatchError::InvalidOp(msg) => msg.clone(),
        };
        let op = &failure.op;
        let path = format_json_pointer(op.path());
        let message = match op.from() {
            Some(from) => format!(
                "operation {} ({} from \"{}\" to \"{}\") failed: {}",
                failure.index,
                op.op_name(),
                format_json_pointer(from),
                path,
                reason
            ),
            None => format!(
                "operation {} ({} at \"{}\") failed: {}",
                failure.index,
                op.op_name(),
                path,
                reason
            ),
        };
        Self::new((&failure.error).into(), message, path)
    }
}

impl From<SchemaError> for GateError {
    fn from(err: SchemaError) -> Self {
        Self::new(ErrorKind::InvalidSchema, err.to_string(), "")
    }
}

impl From<PatchError> for GateError {
    fn from(err: PatchError) -> Self {
        let message = match err {
            PatchError::InvalidOp(msg) => msg,
            other => other.to_string(),
        };
        Self::new(ErrorKind::InvalidPatch, message, "")
    }
}

impl From<patch_gate_json_patch::ValidationError> for GateError {
    fn from(err: patch_gate_json_patch::ValidationError) -> Self {
        Self::new(ErrorKind::InvalidPatch, err.0, "")
    }
}
