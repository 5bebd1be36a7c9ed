//! Decodes a [`TypeNode`] from its JSON description.
//!
//! ```json
//! {
//!   "type": "object",
//!   "label": "cat",
//!   "keys": {
//!     "id": {"type": "string", "required": true, "noChange": true},
//!     "favoriteToys": {"type": "array", "items": {"type": "string"}, "default": []}
//!   }
//! }
//! ```
//!
//! `keys` are validated in the order they appear in the JSON text.
//! `noChange: true` compares against the original document supplied at
//! validation time. Other members, such as `description`, are ignored.

use patch_gate_json_pointer::escape_component;
use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::schema::{ArrSchema, NumSchema, ObjSchema, StrSchema};
use crate::type_def::{ArrType, ObjField, TypeBuilder, TypeNode};

/// Schema decoding errors. `at` is the JSON Pointer of the offending node
/// inside the schema document.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("schema node at \"{at}\" must be an object")]
    NotAnObject { at: String },
    #[error("schema node at \"{at}\" has unknown type \"{type_}\"")]
    UnknownType { at: String, type_: String },
    #[error("schema node at \"{at}\": \"{field}\" must be {expected}")]
    InvalidField {
        at: String,
        field: &'static str,
        expected: &'static str,
    },
    #[error("schema node at \"{at}\": invalid pattern: {source}")]
    InvalidPattern {
        at: String,
        #[source]
        source: regex::Error,
    },
}

/// Decodes a schema description.
pub fn from_json(schema: &Value) -> Result<TypeNode, SchemaError> {
    decode(schema, "")
}

fn decode(schema: &Value, at: &str) -> Result<TypeNode, SchemaError> {
    let Some(obj) = schema.as_object() else {
        return Err(SchemaError::NotAnObject { at: at.to_string() });
    };
    let f = Fields { obj, at };
    let t = TypeBuilder::new();
    let type_ = f.str("type")?.unwrap_or("any");
    let mut node = match type_ {
        "any" => t.any(),
        "boolean" | "bool" => t.bool(),
        "number" | "num" => t.Number(f.num_schema()?),
        "string" | "str" => t.String(f.str_schema()?),
        "array" | "arr" => {
            let items = match obj.get("items") {
                Some(items) => Some(decode(items, &format!("{at}/items"))?),
                None => None,
            };
            let schema = ArrSchema {
                min: f.u64("min")?,
                max: f.u64("max")?,
            };
            match items {
                Some(items) => t.Array(items, schema),
                None => TypeNode::Arr(ArrType::new(None, schema)),
            }
        }
        "object" | "obj" => {
            let keys = match obj.get("keys") {
                None => Vec::new(),
                Some(Value::Object(keys)) => decode_keys(keys, at)?,
                Some(_) => return Err(f.invalid("keys", "an object")),
            };
            t.ObjectWith(
                keys,
                ObjSchema {
                    unknown: f.bool("unknown")?,
                },
            )
        }
        other => {
            return Err(SchemaError::UnknownType {
                at: at.to_string(),
                type_: other.to_string(),
            })
        }
    };

    if let Some(label) = f.str("label")? {
        node = node.label(label);
    }
    if f.bool("required")?.unwrap_or(false) {
        node = node.required();
    }
    if let Some(default) = obj.get("default") {
        node = node.default_value(default.clone());
    }
    if f.bool("noChange")?.unwrap_or(false) {
        node = node.immutable();
    }
    Ok(node)
}

fn decode_keys(keys: &Map<String, Value>, at: &str) -> Result<Vec<ObjField>, SchemaError> {
    keys.iter()
        .map(|(key, val)| {
            let at = format!("{at}/keys/{}", escape_component(key));
            Ok(ObjField::new(key.clone(), decode(val, &at)?))
        })
        .collect()
}

/// Typed accessors over one schema node's fields.
struct Fields<'a> {
    obj: &'a Map<String, Value>,
    at: &'a str,
}

impl<'a> Fields<'a> {
    fn invalid(&self, field: &'static str, expected: &'static str) -> SchemaError {
        SchemaError::InvalidField {
            at: self.at.to_string(),
            field,
            expected,
        }
    }

    fn str(&self, field: &'static str) -> Result<Option<&'a str>, SchemaError> {
        match self.obj.get(field) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.invalid(field, "a string")),
        }
    }

    fn bool(&self, field: &'static str) -> Result<Option<bool>, SchemaError> {
        match self.obj.get(field) {
            None => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.invalid(field, "a boolean")),
        }
    }

    fn f64(&self, field: &'static str) -> Result<Option<f64>, SchemaError> {
        match self.obj.get(field) {
            None => Ok(None),
            Some(v) => v.as_f64().map(Some).ok_or_else(|| self.invalid(field, "a number")),
        }
    }

    fn u64(&self, field: &'static str) -> Result<Option<u64>, SchemaError> {
        match self.obj.get(field) {
            None => Ok(None),
            Some(v) => v
                .as_u64()
                .map(Some)
                .ok_or_else(|| self.invalid(field, "a non-negative integer")),
        }
    }

    fn num_schema(&self) -> Result<NumSchema, SchemaError> {
        let mut schema = NumSchema {
            integer: self.bool("integer")?.unwrap_or(false),
            gt: self.f64("gt")?,
            gte: self.f64("gte")?.or(self.f64("min")?),
            lt: self.f64("lt")?,
            lte: self.f64("lte")?.or(self.f64("max")?),
        };
        if self.bool("positive")?.unwrap_or(false) {
            schema.gt = Some(schema.gt.map_or(0.0, |gt| gt.max(0.0)));
        }
        if self.bool("negative")?.unwrap_or(false) {
            schema.lt = Some(schema.lt.map_or(0.0, |lt| lt.min(0.0)));
        }
        Ok(schema)
    }

    fn str_schema(&self) -> Result<StrSchema, SchemaError> {
        let pattern = match self.str("pattern")? {
            None => None,
            Some(p) => Some(Regex::new(p).map_err(|source| SchemaError::InvalidPattern {
                at: self.at.to_string(),
                source,
            })?),
        };
        Ok(StrSchema {
            min: self.u64("min")?,
            max: self.u64("max")?,
            ascii: self.bool("ascii")?.unwrap_or(false),
            pattern,
        })
    }
}
