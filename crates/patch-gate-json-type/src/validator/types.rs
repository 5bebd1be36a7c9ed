use patch_gate_json_pointer::{format_json_pointer, Path};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::ValidationError;

/// Validator configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidatorOptions {
    /// Accept object keys the schema does not declare. Objects can override
    /// this with `ObjSchema::unknown`.
    pub allow_unknown: bool,
    /// Substitute `default` values for absent fields in the output value.
    pub apply_defaults: bool,
}

impl Default for ValidatorOptions {
    fn default() -> Self {
        Self {
            allow_unknown: false,
            apply_defaults: true,
        }
    }
}

/// External state the validator may consult.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidationContext<'a> {
    /// Pre-mutation document for [`NoChange::Original`](crate::NoChange::Original)
    /// rules. Without it those rules are not evaluated.
    pub original: Option<&'a Value>,
}

impl<'a> ValidationContext<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_original(original: &'a Value) -> Self {
        Self {
            original: Some(original),
        }
    }
}

/// Coarse classification of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    RequiredFieldMissing,
    ImmutableFieldChanged,
    TypeOrConstraintViolation,
}

impl From<ValidationError> for ErrorKind {
    fn from(code: ValidationError) -> Self {
        match code {
            ValidationError::Required => ErrorKind::RequiredFieldMissing,
            ValidationError::NoChange => ErrorKind::ImmutableFieldChanged,
            _ => ErrorKind::TypeOrConstraintViolation,
        }
    }
}

/// The first failing rule, with a label-qualified message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub code: ValidationError,
    /// E.g. `child "meta" fails because [child "born" fails because ["born" is required]]`.
    pub message: String,
    /// Location of the failing value in the validated document.
    pub path: Path,
}

impl Violation {
    pub fn kind(&self) -> ErrorKind {
        self.code.into()
    }

    pub fn pointer(&self) -> String {
        format_json_pointer(&self.path)
    }

    /// Nests the message under one more containing level.
    pub(crate) fn wrap(mut self, prefix: std::fmt::Arguments<'_>) -> Self {
        self.message = format!("{prefix} [{}]", self.message);
        self
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Violation {}

/// Validator output. Never panics, never throws: success and failure are
/// both plain values.
#[derive(Debug, Clone, PartialEq)]
pub struct Validated {
    /// On success, the input with defaults applied; on failure, the input
    /// as given.
    pub value: Value,
    pub error: Option<Violation>,
}

impl Validated {
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }
}
