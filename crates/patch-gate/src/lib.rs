//! `patch-gate`: validates a JSON Patch against a schema before it is
//! committed.
//!
//! A call takes the original document, a schema and an ordered list of
//! patch operations:
//!
//! 1. the original is deep-copied ([`snapshot`]);
//! 2. the operations run against the copy in apply-and-report mode, so a
//!    failing operation is skipped and recorded rather than aborting;
//! 3. the result is validated against the schema, with the original
//!    available to immutability rules;
//! 4. everything is folded into a [`GateResult`].
//!
//! The original document is never modified.
//!
//! ```
//! use patch_gate::{validate, ErrorKind};
//! use patch_gate_json_patch::from_json_patch;
//! use patch_gate_json_type::TypeBuilder;
//! use serde_json::json;
//!
//! let t = TypeBuilder::new();
//! let schema = t.Object(vec![t.prop("id", t.str().required().immutable())]);
//! let original = json!({"id": "k1773y"});
//! let ops = from_json_patch(&json!([{"op": "replace", "path": "/id", "value": "f00zy"}])).unwrap();
//!
//! let result = validate(&original, &schema, &ops);
//! assert_eq!(result.error.unwrap().kind, ErrorKind::ImmutableFieldChanged);
//! assert_eq!(original, json!({"id": "k1773y"}));
//! ```

pub mod cli;
pub mod error;
pub mod gate;
pub mod options;
pub mod snapshot;

pub use error::{ErrorKind, GateError};
pub use gate::{validate, validate_json, validate_json_with, validate_with, GateResult};
pub use options::GateOptions;
pub use snapshot::snapshot;
