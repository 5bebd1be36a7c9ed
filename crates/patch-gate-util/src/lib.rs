//! patch-gate-util - document utilities shared by the patch-gate crates.
//!
//! Two primitives every stage of the gate relies on:
//! - [`deep_clone`]: a structural copy of a document that shares nothing
//!   with its source;
//! - [`deep_equal`]: structural comparison used by `test` operations and by
//!   immutability checks.

pub mod json_clone;
pub mod json_equal;

pub use json_clone::deep_clone;
pub use json_equal::{deep_equal, numbers_equal};
