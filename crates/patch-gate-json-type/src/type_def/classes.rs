//! Type class implementations.

use super::abs_type::BaseInfo;
use super::TypeNode;
use crate::schema::{ArrSchema, NumSchema, ObjSchema, StrSchema};

// -------------------------------------------------------------------------
// AnyType / BoolType

#[derive(Debug, Clone, Default)]
pub struct AnyType {
    pub base: BaseInfo,
}

#[derive(Debug, Clone, Default)]
pub struct BoolType {
    pub base: BaseInfo,
}

// -------------------------------------------------------------------------
// NumType

#[derive(Debug, Clone, Default)]
pub struct NumType {
    pub schema: NumSchema,
    pub base: BaseInfo,
}

impl NumType {
    pub fn new(schema: NumSchema) -> Self {
        Self {
            schema,
            base: BaseInfo::default(),
        }
    }
}

// -------------------------------------------------------------------------
// StrType

#[derive(Debug, Clone, Default)]
pub struct StrType {
    pub schema: StrSchema,
    pub base: BaseInfo,
}

impl StrType {
    pub fn new(schema: StrSchema) -> Self {
        Self {
            schema,
            base: BaseInfo::default(),
        }
    }
}

// -------------------------------------------------------------------------
// ArrType

#[derive(Debug, Clone, Default)]
pub struct ArrType {
    /// Rule applied to every element. `None` accepts any element.
    pub items: Option<Box<TypeNode>>,
    pub schema: ArrSchema,
    pub base: BaseInfo,
}

impl ArrType {
    pub fn new(items: Option<TypeNode>, schema: ArrSchema) -> Self {
        Self {
            items: items.map(Box::new),
            schema,
            base: BaseInfo::default(),
        }
    }
}

// -------------------------------------------------------------------------
// ObjType

/// A declared object key and the rule for its value.
#[derive(Debug, Clone)]
pub struct ObjField {
    pub key: String,
    pub val: TypeNode,
}

impl ObjField {
    pub fn new(key: impl Into<String>, val: TypeNode) -> Self {
        Self {
            key: key.into(),
            val,
        }
    }

    /// Label used for this field in error messages.
    pub fn label(&self) -> &str {
        self.val.base().label.as_deref().unwrap_or(&self.key)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjType {
    /// Declared keys, in validation order. An object without declared keys
    /// accepts any keys.
    pub keys: Vec<ObjField>,
    pub schema: ObjSchema,
    pub base: BaseInfo,
}

impl ObjType {
    pub fn new(keys: Vec<ObjField>) -> Self {
        Self {
            keys,
            schema: ObjSchema::default(),
            base: BaseInfo::default(),
        }
    }

    pub fn field(&self, key: &str) -> Option<&ObjField> {
        self.keys.iter().find(|f| f.key == key)
    }
}
