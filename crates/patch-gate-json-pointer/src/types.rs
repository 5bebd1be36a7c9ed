//! Type definitions for JSON Pointer paths.

/// One reference token: an object key or an array index in decimal form.
pub type PathStep = String;

/// A decoded JSON Pointer.
pub type Path = Vec<PathStep>;
