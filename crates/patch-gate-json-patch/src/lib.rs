//! JSON Patch (RFC 6902).
//!
//! # Operations
//!
//! The six RFC 6902 operations: `add`, `remove`, `replace`, `copy`, `move`
//! and `test` (with the `not` modifier for inverted tests).
//!
//! # Application modes
//!
//! - [`apply_op`] / [`apply_ops`] stop at the first failing operation,
//!   including a failing `test`.
//! - [`apply_and_report`] runs the whole list: failing operations are
//!   skipped and recorded, `test` outcomes are collected as data. This is
//!   the mode the validation gate uses.

pub mod apply;
pub mod codec;
pub mod types;
pub mod validate;

pub use apply::{apply_and_report, apply_op, apply_ops, test_value};
pub use codec::{from_json, from_json_patch, to_json, to_json_patch};
pub use types::{ApplyReport, Op, OpFailure, PatchError, PatchResult, TestOutcome};
pub use validate::{validate_operation, validate_operations, ValidationError};
