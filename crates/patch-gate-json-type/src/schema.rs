//! Constraint parameters for the typed schema nodes.

use regex::Regex;

/// Numeric constraints.
#[derive(Debug, Clone, Default)]
pub struct NumSchema {
    pub integer: bool,
    pub gt: Option<f64>,
    pub gte: Option<f64>,
    pub lt: Option<f64>,
    pub lte: Option<f64>,
}

impl NumSchema {
    /// `> 0`.
    pub fn positive() -> Self {
        Self {
            gt: Some(0.0),
            ..Self::default()
        }
    }

    pub fn integer(mut self) -> Self {
        self.integer = true;
        self
    }
}

/// String constraints. Lengths count Unicode scalar values.
#[derive(Debug, Clone, Default)]
pub struct StrSchema {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub ascii: bool,
    pub pattern: Option<Regex>,
}

/// Array length constraints.
#[derive(Debug, Clone, Default)]
pub struct ArrSchema {
    pub min: Option<u64>,
    pub max: Option<u64>,
}

/// Object options.
#[derive(Debug, Clone, Default)]
pub struct ObjSchema {
    /// Overrides `ValidatorOptions::allow_unknown` for this object.
    pub unknown: Option<bool>,
}
