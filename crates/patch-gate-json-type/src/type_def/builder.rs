//! TypeBuilder: factory for constructing TypeNode instances.

use super::classes::*;
use super::TypeNode;
use crate::schema::{ArrSchema, NumSchema, ObjSchema, StrSchema};

/// Factory for constructing [`TypeNode`] instances.
///
/// ```
/// use patch_gate_json_type::{NumSchema, TypeBuilder};
///
/// let t = TypeBuilder::new();
/// let cat = t.Object(vec![
///     t.prop("id", t.str().required().immutable()),
///     t.prop("meta", t.Object(vec![
///         t.prop("born", t.Number(NumSchema::positive().integer()).required().immutable()),
///     ])),
/// ]).label("cat");
/// assert_eq!(cat.kind(), "object");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeBuilder;

#[allow(non_snake_case)]
impl TypeBuilder {
    pub fn new() -> Self {
        Self
    }

    // ------------------------------------------------------------------
    // Shorthand getters

    pub fn any(&self) -> TypeNode {
        TypeNode::Any(AnyType::default())
    }

    pub fn bool(&self) -> TypeNode {
        TypeNode::Bool(BoolType::default())
    }

    pub fn num(&self) -> TypeNode {
        self.Number(NumSchema::default())
    }

    pub fn str(&self) -> TypeNode {
        self.String(StrSchema::default())
    }

    /// Array of anything.
    pub fn arr(&self) -> TypeNode {
        TypeNode::Arr(ArrType::default())
    }

    /// Object accepting any keys.
    pub fn obj(&self) -> TypeNode {
        self.Object(vec![])
    }

    // ------------------------------------------------------------------
    // Factory methods

    pub fn Number(&self, schema: NumSchema) -> TypeNode {
        TypeNode::Num(NumType::new(schema))
    }

    pub fn String(&self, schema: StrSchema) -> TypeNode {
        TypeNode::Str(StrType::new(schema))
    }

    pub fn Array(&self, items: TypeNode, schema: ArrSchema) -> TypeNode {
        TypeNode::Arr(ArrType::new(Some(items), schema))
    }

    pub fn Object(&self, keys: Vec<ObjField>) -> TypeNode {
        TypeNode::Obj(ObjType::new(keys))
    }

    pub fn ObjectWith(&self, keys: Vec<ObjField>, schema: ObjSchema) -> TypeNode {
        TypeNode::Obj(ObjType {
            schema,
            ..ObjType::new(keys)
        })
    }

    pub fn prop(&self, key: impl Into<String>, val: TypeNode) -> ObjField {
        ObjField::new(key, val)
    }
}
