//! Core types for the JSON Patch module.

use serde_json::Value;
use thiserror::Error;

pub use patch_gate_json_pointer::Path;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// `path` (or `from`) does not resolve in the working document.
    #[error("NOT_FOUND")]
    NotFound,
    /// A `test` operation observed a different value.
    #[error("TEST")]
    Test,
    /// An array step is not a canonical index.
    #[error("INVALID_INDEX")]
    InvalidIndex,
    /// The operation cannot be carried out on this location, e.g. a `move`
    /// into its own child or removing the document root.
    #[error("INVALID_TARGET")]
    InvalidTarget,
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

impl PatchError {
    /// Path resolution failures, as opposed to test mismatches and
    /// structurally impossible operations.
    pub fn is_path_error(&self) -> bool {
        matches!(self, PatchError::NotFound | PatchError::InvalidIndex)
    }
}

// ── Op enum ───────────────────────────────────────────────────────────────

/// A JSON Patch operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Add { path: Path, value: Value },
    Remove { path: Path },
    Replace { path: Path, value: Value },
    Copy { path: Path, from: Path },
    Move { path: Path, from: Path },
    Test { path: Path, value: Value, not: bool },
}

impl Op {
    /// Returns the operation name as it appears in the `op` member.
    pub fn op_name(&self) -> &'static str {
        match self {
            Op::Add { .. } => "add",
            Op::Remove { .. } => "remove",
            Op::Replace { .. } => "replace",
            Op::Copy { .. } => "copy",
            Op::Move { .. } => "move",
            Op::Test { .. } => "test",
        }
    }

    /// Returns the target path of the operation.
    pub fn path(&self) -> &Path {
        match self {
            Op::Add { path, .. }
            | Op::Remove { path }
            | Op::Replace { path, .. }
            | Op::Copy { path, .. }
            | Op::Move { path, .. }
            | Op::Test { path, .. } => path,
        }
    }

    /// Returns the source path of `copy` and `move`.
    pub fn from(&self) -> Option<&Path> {
        match self {
            Op::Copy { from, .. } | Op::Move { from, .. } => Some(from),
            _ => None,
        }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Op::Test { .. })
    }
}

// ── Result types ──────────────────────────────────────────────────────────

/// Result of applying a full patch in abort-on-failure mode.
#[derive(Debug, Clone)]
pub struct PatchResult {
    pub doc: Value,
    /// Value displaced by each operation, `None` for `test` and for inserts
    /// into fresh locations.
    pub old: Vec<Option<Value>>,
}

/// A non-test operation that could not be applied.
#[derive(Debug, Clone, PartialEq)]
pub struct OpFailure {
    /// Position of the operation in the patch.
    pub index: usize,
    pub op: Op,
    pub error: PatchError,
}

/// Outcome of one `test` operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestOutcome {
    pub index: usize,
    pub passed: bool,
}

/// Result of [`apply_and_report`](crate::apply_and_report).
#[derive(Debug, Clone)]
pub struct ApplyReport {
    /// The working document after every applicable operation ran.
    pub doc: Value,
    /// Non-test failures in patch order. Each failed operation was skipped.
    pub failures: Vec<OpFailure>,
    /// One entry per `test` operation, in patch order.
    pub tests: Vec<TestOutcome>,
}

impl ApplyReport {
    /// Aggregate `test` flag: `None` without `test` operations, otherwise
    /// whether every one of them passed.
    pub fn test(&self) -> Option<bool> {
        if self.tests.is_empty() {
            None
        } else {
            Some(self.tests.iter().all(|t| t.passed))
        }
    }

    pub fn first_failure(&self) -> Option<&OpFailure> {
        self.failures.first()
    }
}
