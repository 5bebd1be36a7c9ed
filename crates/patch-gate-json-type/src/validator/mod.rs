pub mod types;
pub mod validator;

pub use types::{ErrorKind, Validated, ValidationContext, ValidatorOptions, Violation};
pub use validator::validate;
