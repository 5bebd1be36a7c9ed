//! Runtime type nodes.

use serde_json::Value;
use std::sync::Arc;

pub mod abs_type;
pub mod builder;
pub mod classes;

pub use abs_type::{BaseInfo, NoChange};
pub use builder::TypeBuilder;
pub use classes::{AnyType, ArrType, BoolType, NumType, ObjField, ObjType, StrType};

/// A schema node.
#[derive(Debug, Clone)]
pub enum TypeNode {
    Any(AnyType),
    Bool(BoolType),
    Num(NumType),
    Str(StrType),
    Arr(ArrType),
    Obj(ObjType),
}

impl TypeNode {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Any(_) => "any",
            Self::Bool(_) => "boolean",
            Self::Num(_) => "number",
            Self::Str(_) => "string",
            Self::Arr(_) => "array",
            Self::Obj(_) => "object",
        }
    }

    /// Returns a reference to the shared base info.
    pub fn base(&self) -> &BaseInfo {
        match self {
            Self::Any(t) => &t.base,
            Self::Bool(t) => &t.base,
            Self::Num(t) => &t.base,
            Self::Str(t) => &t.base,
            Self::Arr(t) => &t.base,
            Self::Obj(t) => &t.base,
        }
    }

    pub fn base_mut(&mut self) -> &mut BaseInfo {
        match self {
            Self::Any(t) => &mut t.base,
            Self::Bool(t) => &mut t.base,
            Self::Num(t) => &mut t.base,
            Self::Str(t) => &mut t.base,
            Self::Arr(t) => &mut t.base,
            Self::Obj(t) => &mut t.base,
        }
    }

    // ------------------------------------------------------------------
    // Fluent modifiers

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.base_mut().label = Some(label.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.base_mut().required = true;
        self
    }

    pub fn optional(mut self) -> Self {
        self.base_mut().required = false;
        self
    }

    pub fn default_value(mut self, value: Value) -> Self {
        self.base_mut().default = Some(value);
        self
    }

    /// The value must not differ from the one at the same path in
    /// `original`.
    pub fn no_change(mut self, original: Arc<Value>) -> Self {
        self.base_mut().no_change = Some(NoChange::Against(original));
        self
    }

    /// Like [`no_change`](Self::no_change), against whichever original the
    /// validator is handed at call time.
    pub fn immutable(mut self) -> Self {
        self.base_mut().no_change = Some(NoChange::Original);
        self
    }

    /// Object only: accept (or reject) keys not declared in the schema.
    pub fn unknown(mut self, allow: bool) -> Self {
        if let Self::Obj(t) = &mut self {
            t.schema.unknown = Some(allow);
        }
        self
    }
}

impl std::fmt::Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind())
    }
}
