//! `patch-gate-json-type`: schema type nodes and their validator.
//!
//! A schema is a [`TypeNode`] tree. Besides ordinary shape rules (types,
//! required fields, numeric bounds, string and array constraints, defaults)
//! any node may carry a [`NoChange`] rule: its value must be identical to
//! the value at the same path in the pre-mutation document. The validator
//! receives that document through [`ValidationContext`].

pub mod codec;
pub mod constants;
pub mod schema;
pub mod type_def;
pub mod validator;

pub use codec::{from_json, SchemaError};
pub use constants::ValidationError;
pub use schema::{ArrSchema, NumSchema, ObjSchema, StrSchema};
pub use type_def::{BaseInfo, NoChange, ObjField, TypeBuilder, TypeNode};
pub use validator::{
    validate, ErrorKind, Validated, ValidationContext, ValidatorOptions, Violation,
};
