//! Base type node info shared by every node kind.

use serde_json::Value;
use std::sync::Arc;

/// Immutability rule: the node's value must equal the value found at the
/// same path in a reference document.
#[derive(Debug, Clone, PartialEq)]
pub enum NoChange {
    /// Compare against the original document threaded through
    /// [`ValidationContext`](crate::ValidationContext).
    Original,
    /// Compare against a document captured when the schema was built.
    Against(Arc<Value>),
}

/// Fields common to all type nodes.
#[derive(Debug, Clone, Default)]
pub struct BaseInfo {
    /// Name used in error messages. Falls back to the object key (or the
    /// array position) of the node.
    pub label: Option<String>,
    /// Substituted when the field is absent. Not validated.
    pub default: Option<Value>,
    pub required: bool,
    pub no_change: Option<NoChange>,
}
