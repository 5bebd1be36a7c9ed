//! JSON Pointer (RFC 6901) paths.
//!
//! Paths are plain `Vec<String>` reference tokens; this crate converts them
//! to and from their textual pointer form and resolves them inside a
//! `serde_json::Value`.
//!
//! # Example
//!
//! ```
//! use patch_gate_json_pointer::{parse_json_pointer, format_json_pointer, get};
//!
//! let path = parse_json_pointer("/meta/born");
//! assert_eq!(path, vec!["meta".to_string(), "born".to_string()]);
//! assert_eq!(format_json_pointer(&path), "/meta/born");
//!
//! let doc = serde_json::json!({"meta": {"born": 1452474481612_u64}});
//! assert_eq!(get(&doc, &path), Some(&serde_json::json!(1452474481612_u64)));
//! ```

use thiserror::Error;

pub mod get;
pub mod types;
pub mod validate;

pub use get::{array_index, get, get_mut};
pub use types::{Path, PathStep};
pub use validate::{validate_json_pointer, validate_path, ValidationError};

/// Unescapes a JSON Pointer path component.
///
/// `~1` becomes `/` and `~0` becomes `~`.
///
/// ```
/// use patch_gate_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, otherwise "~01" would decode to "/".
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// ```
/// use patch_gate_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parses a JSON Pointer string into path components.
///
/// The empty pointer is the root path. A pointer without a leading `/` is
/// not a valid RFC 6901 pointer; callers that accept untrusted input should
/// run [`validate_json_pointer`] first.
pub fn parse_json_pointer(pointer: &str) -> Path {
    match pointer.strip_prefix('/') {
        None if pointer.is_empty() => Vec::new(),
        None => pointer.split('/').map(unescape_component).collect(),
        Some(rest) => rest.split('/').map(unescape_component).collect(),
    }
}

/// Formats path components into a JSON Pointer string.
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::with_capacity(path.iter().map(|s| s.len() + 1).sum());
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Returns `true` if `child` lies strictly below `parent`.
///
/// ```
/// use patch_gate_json_pointer::{is_child, parse_json_pointer};
///
/// assert!(is_child(&parse_json_pointer("/a"), &parse_json_pointer("/a/b")));
/// assert!(!is_child(&parse_json_pointer("/a"), &parse_json_pointer("/a")));
/// assert!(!is_child(&parse_json_pointer("/a"), &parse_json_pointer("/ab")));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Splits a path into its parent path and final step.
///
/// # Errors
///
/// `JsonPointerError::NoParent` for the root path.
pub fn split_last(path: &[String]) -> Result<(&[String], &str), JsonPointerError> {
    match path.split_last() {
        Some((last, parent)) => Ok((parent, last.as_str())),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Checks whether a string is a valid array index token.
///
/// RFC 6901 forbids leading zeros and signs.
///
/// ```
/// use patch_gate_json_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("-"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(u8::is_ascii_digit)
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum JsonPointerError {
    #[error("NOT_FOUND")]
    NotFound,
    #[error("INVALID_INDEX")]
    InvalidIndex,
    #[error("NO_PARENT")]
    NoParent,
}
