//! Runtime validator: validates JSON values against TypeNode schemas.
//!
//! Rules for a field run in a fixed order: presence (`required`), then the
//! immutability rule, then the node's own type rules. Object keys are
//! visited in declaration order and the first failure aborts the walk.
//! Each containing level prefixes the failure with its own label, so the
//! final message reads outermost first. An absent object or array is
//! treated as the removal of every immutable field declared beneath it.

use std::fmt::Display;

use patch_gate_json_pointer::{get, Path};
use patch_gate_util::deep_equal;
use serde_json::{Map, Value};

use crate::constants::ValidationError;
use crate::type_def::classes::*;
use crate::type_def::{BaseInfo, NoChange, TypeNode};

use super::types::{Validated, ValidationContext, ValidatorOptions, Violation};

/// Validate a JSON value against a TypeNode.
///
/// `ctx.original` is the document [`NoChange::Original`] rules compare
/// against; every rule looks it up at the path of the node being checked.
pub fn validate(
    value: &Value,
    type_: &TypeNode,
    opts: &ValidatorOptions,
    ctx: &ValidationContext<'_>,
) -> Validated {
    let mut walk = Walk {
        opts,
        original: ctx.original,
        path: Path::new(),
    };
    let label = type_.base().label.as_deref().unwrap_or("value");
    match walk.field(Some(value), type_, label) {
        Ok(out) => Validated {
            value: out.unwrap_or_else(|| value.clone()),
            error: None,
        },
        Err(violation) => Validated {
            value: value.clone(),
            error: Some(violation),
        },
    }
}

type Outcome<T> = Result<T, Violation>;

struct Walk<'a> {
    opts: &'a ValidatorOptions,
    original: Option<&'a Value>,
    /// Path of the node currently being validated.
    path: Path,
}

impl Walk<'_> {
    fn fail(&self, code: ValidationError, label: &str, reason: impl Display) -> Violation {
        Violation {
            code,
            message: format!("\"{label}\" {reason}"),
            path: self.path.clone(),
        }
    }

    /// Validates a slot that may be empty. Returns the output value, or
    /// `None` when the slot stays empty.
    fn field(&mut self, present: Option<&Value>, node: &TypeNode, label: &str) -> Outcome<Option<Value>> {
        let base = node.base();
        match present {
            None => {
                if base.required {
                    return Err(self.fail(ValidationError::Required, label, "is required"));
                }
                self.check_no_change(None, base, label)?;
                self.check_removed_children(node, label)?;
                Ok(if self.opts.apply_defaults {
                    base.default.clone()
                } else {
                    None
                })
            }
            Some(value) => {
                self.check_no_change(Some(value), base, label)?;
                self.node(value, node, label).map(Some)
            }
        }
    }

    fn check_no_change(&self, current: Option<&Value>, base: &BaseInfo, label: &str) -> Outcome<()> {
        let original = match &base.no_change {
            None => return Ok(()),
            Some(NoChange::Against(doc)) => Some(doc.as_ref()),
            Some(NoChange::Original) => self.original,
        };
        let Some(original) = original else {
            return Ok(());
        };
        let unchanged = match (get(original, &self.path), current) {
            (Some(before), Some(after)) => deep_equal(before, after),
            (None, None) => true,
            _ => false,
        };
        if unchanged {
            Ok(())
        } else {
            Err(self.fail(ValidationError::NoChange, label, "is not allowed to be changed"))
        }
    }

    /// An absent container takes its declared descendants with it: every
    /// immutable one that existed in the original has been removed.
    fn check_removed_children(&mut self, node: &TypeNode, label: &str) -> Outcome<()> {
        match node {
            TypeNode::Obj(t) => {
                for field in &t.keys {
                    if !has_no_change(&field.val) {
                        continue;
                    }
                    let child_label = field.label();
                    self.path.push(field.key.clone());
                    let result = self
                        .check_no_change(None, field.val.base(), child_label)
                        .and_then(|()| self.check_removed_children(&field.val, child_label));
                    self.path.pop();
                    result.map_err(|e| e.wrap(format_args!("child \"{child_label}\" fails because")))?;
                }
                Ok(())
            }
            TypeNode::Arr(ArrType { items: Some(items), .. }) if has_no_change(items) => {
                for i in 0..self.original_len(items) {
                    let position = i.to_string();
                    let item_label = items.base().label.as_deref().unwrap_or(position.as_str());
                    self.path.push(position.clone());
                    let result = self
                        .check_no_change(None, items.base(), item_label)
                        .and_then(|()| self.check_removed_children(items, item_label));
                    self.path.pop();
                    result.map_err(|e| e.wrap(format_args!("\"{label}\" at position {i} fails because")))?;
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// Length of the longest array found at the current path in any
    /// document the rules under `items` compare against.
    fn original_len(&self, items: &TypeNode) -> usize {
        let mut docs: Vec<&Value> = self.original.into_iter().collect();
        captured_originals(items, &mut docs);
        docs.iter()
            .filter_map(|doc| get(doc, &self.path)?.as_array().map(Vec::len))
            .max()
            .unwrap_or(0)
    }

    fn node(&mut self, value: &Value, node: &TypeNode, label: &str) -> Outcome<Value> {
        match node {
            TypeNode::Any(_) => Ok(value.clone()),
            TypeNode::Bool(_) => {
                if !value.is_boolean() {
                    return Err(self.fail(ValidationError::Bool, label, "must be a boolean"));
                }
                Ok(value.clone())
            }
            TypeNode::Num(t) => self.num(value, t, label),
            TypeNode::Str(t) => self.str(value, t, label),
            TypeNode::Arr(t) => self.arr(value, t, label),
            TypeNode::Obj(t) => self.obj(value, t, label),
        }
    }

    fn num(&self, value: &Value, t: &NumType, label: &str) -> Outcome<Value> {
        let Some(num) = value.as_f64() else {
            return Err(self.fail(ValidationError::Num, label, "must be a number"));
        };
        let schema = &t.schema;
        if schema.integer && num.fract() != 0.0 {
            return Err(self.fail(ValidationError::Int, label, "must be an integer"));
        }
        if let Some(gt) = schema.gt {
            if num <= gt {
                return Err(self.fail(ValidationError::Gt, label, format_args!("must be greater than {gt}")));
            }
        }
        if let Some(gte) = schema.gte {
            if num < gte {
                return Err(self.fail(
                    ValidationError::Gte,
                    label,
                    format_args!("must be larger than or equal to {gte}"),
                ));
            }
        }
        if let Some(lt) = schema.lt {
            if num >= lt {
                return Err(self.fail(ValidationError::Lt, label, format_args!("must be less than {lt}")));
            }
        }
        if let Some(lte) = schema.lte {
            if num > lte {
                return Err(self.fail(
                    ValidationError::Lte,
                    label,
                    format_args!("must be less than or equal to {lte}"),
                ));
            }
        }
        Ok(value.clone())
    }

    fn str(&self, value: &Value, t: &StrType, label: &str) -> Outcome<Value> {
        let Some(s) = value.as_str() else {
            return Err(self.fail(ValidationError::Str, label, "must be a string"));
        };
        let schema = &t.schema;
        let len = s.chars().count() as u64;
        if let Some(min) = schema.min {
            if len < min {
                return Err(self.fail(
                    ValidationError::StrLen,
                    label,
                    format_args!("length must be at least {min} characters long"),
                ));
            }
        }
        if let Some(max) = schema.max {
            if len > max {
                return Err(self.fail(
                    ValidationError::StrLen,
                    label,
                    format_args!("length must be less than or equal to {max} characters long"),
                ));
            }
        }
        if schema.ascii && !s.is_ascii() {
            return Err(self.fail(ValidationError::Ascii, label, "must only contain ASCII characters"));
        }
        if let Some(re) = &schema.pattern {
            if !re.is_match(s) {
                return Err(self.fail(
                    ValidationError::Pattern,
                    label,
                    format_args!("with value \"{s}\" fails to match the required pattern: {re}"),
                ));
            }
        }
        Ok(value.clone())
    }

    fn arr(&mut self, value: &Value, t: &ArrType, label: &str) -> Outcome<Value> {
        let Some(arr) = value.as_array() else {
            return Err(self.fail(ValidationError::Arr, label, "must be an array"));
        };
        let len = arr.len() as u64;
        if let Some(min) = t.schema.min {
            if len < min {
                return Err(self.fail(
                    ValidationError::ArrLen,
                    label,
                    format_args!("must contain at least {min} items"),
                ));
            }
        }
        if let Some(max) = t.schema.max {
            if len > max {
                return Err(self.fail(
                    ValidationError::ArrLen,
                    label,
                    format_args!("must contain less than or equal to {max} items"),
                ));
            }
        }
        let Some(items) = &t.items else {
            return Ok(value.clone());
        };

        let mut out = Vec::with_capacity(arr.len());
        for (i, item) in arr.iter().enumerate() {
            let position = i.to_string();
            let item_label = items.base().label.as_deref().unwrap_or(position.as_str());
            self.path.push(position.clone());
            let result = self.field(Some(item), items, item_label);
            self.path.pop();
            let validated = result
                .map_err(|e| e.wrap(format_args!("\"{label}\" at position {i} fails because")))?;
            out.push(validated.unwrap_or_else(|| item.clone()));
        }
        Ok(Value::Array(out))
    }

    fn obj(&mut self, value: &Value, t: &ObjType, label: &str) -> Outcome<Value> {
        let Some(obj) = value.as_object() else {
            return Err(self.fail(ValidationError::Obj, label, "must be an object"));
        };

        let mut validated: Vec<Option<Value>> = Vec::with_capacity(t.keys.len());
        for field in &t.keys {
            let child_label = field.label();
            self.path.push(field.key.clone());
            let result = self.field(obj.get(&field.key), &field.val, child_label);
            self.path.pop();
            let out = result
                .map_err(|e| e.wrap(format_args!("child \"{child_label}\" fails because")))?;
            validated.push(out);
        }

        let allow_unknown =
            t.keys.is_empty() || t.schema.unknown.unwrap_or(self.opts.allow_unknown);
        if !allow_unknown {
            if let Some(key) = obj.keys().find(|k| t.field(k).is_none()) {
                self.path.push(key.clone());
                let err = self.fail(ValidationError::Unknown, key, "is not allowed");
                self.path.pop();
                return Err(err);
            }
        }

        // Document order first; defaults for absent keys go last, in
        // declaration order.
        let mut out = Map::with_capacity(obj.len());
        for (key, val) in obj {
            match t.keys.iter().position(|f| &f.key == key) {
                Some(i) => {
                    if let Some(v) = validated[i].take() {
                        out.insert(key.clone(), v);
                    }
                }
                None => {
                    out.insert(key.clone(), val.clone());
                }
            }
        }
        for (field, slot) in t.keys.iter().zip(validated) {
            if let Some(v) = slot {
                out.insert(field.key.clone(), v);
            }
        }
        Ok(Value::Object(out))
    }
}

fn children(node: &TypeNode) -> Box<dyn Iterator<Item = &TypeNode> + '_> {
    match node {
        TypeNode::Obj(t) => Box::new(t.keys.iter().map(|f| &f.val)),
        TypeNode::Arr(t) => Box::new(t.items.as_deref().into_iter()),
        _ => Box::new(std::iter::empty()),
    }
}

fn has_no_change(node: &TypeNode) -> bool {
    node.base().no_change.is_some() || children(node).any(has_no_change)
}

fn captured_originals<'n>(node: &'n TypeNode, out: &mut Vec<&'n Value>) {
    if let Some(NoChange::Against(doc)) = &node.base().no_change {
        out.push(doc.as_ref());
    }
    for child in children(node) {
        captured_originals(child, out);
    }
}
