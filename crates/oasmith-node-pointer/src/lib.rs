//! Node reference locators for oasmith.
//!
//! A node reference is a JSON-Pointer-style path (RFC 6901 escaping)
//! identifying one node in an API description document. References are
//! resolved against the live tree at apply time, never earlier, because a
//! command batch routinely creates the node a later reference points at.
//!
//! # Example
//!
//! ```
//! use oasmith_node_pointer::{parse_pointer, format_pointer, lookup};
//!
//! let path = parse_pointer("/paths/~1pets/get");
//! assert_eq!(path, vec!["paths", "/pets", "get"]);
//! assert_eq!(format_pointer(&path), "/paths/~1pets/get");
//!
//! let doc = serde_json::json!({"paths": {"/pets": {"get": {}}}});
//! assert!(lookup(&doc, &path).is_some());
//! ```

use serde_json::Value;
use thiserror::Error;

pub mod resolve;
pub use resolve::{lookup, lookup_mut};

/// A single step of a node reference: an object key or a decimal array
/// index in string form.
pub type PathStep = String;

/// A parsed node reference.
pub type Path = Vec<PathStep>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PointerError {
    #[error("POINTER_INVALID: {0}")]
    Invalid(String),
}

/// Unescapes one reference step.
///
/// `~1` becomes `/` and `~0` becomes `~`. Replacement order matters:
/// `~01` must yield `~1`, not `/`.
pub fn unescape_step(step: &str) -> String {
    if !step.contains('~') {
        return step.to_string();
    }
    step.replace("~1", "/").replace("~0", "~")
}

/// Escapes one reference step.
pub fn escape_step(step: &str) -> String {
    if !step.contains('~') && !step.contains('/') {
        return step.to_string();
    }
    step.replace('~', "~0").replace('/', "~1")
}

/// Parses a pointer string into path steps.
///
/// The empty pointer refers to the document root and parses to an empty
/// path. No validation is performed; use [`validate_pointer`] first for
/// untrusted input.
pub fn parse_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    pointer
        .split('/')
        .skip(1)
        .map(unescape_step)
        .collect()
}

/// Formats path steps back into a pointer string.
pub fn format_pointer(path: &[PathStep]) -> String {
    if path.is_empty() {
        return String::new();
    }
    let mut out = String::with_capacity(path.len() * 8);
    for step in path {
        out.push('/');
        out.push_str(&escape_step(step));
    }
    out
}

/// Validates pointer syntax: a pointer is either empty or starts with `/`.
pub fn validate_pointer(pointer: &str) -> Result<(), PointerError> {
    if pointer.is_empty() || pointer.starts_with('/') {
        Ok(())
    } else {
        Err(PointerError::Invalid(format!(
            "pointer must be empty or start with '/': {pointer:?}"
        )))
    }
}

/// Parses a pointer after validating its syntax.
pub fn parse_pointer_strict(pointer: &str) -> Result<Path, PointerError> {
    validate_pointer(pointer)?;
    Ok(parse_pointer(pointer))
}

/// Returns the parent path, or `None` for the root.
pub fn parent(path: &[PathStep]) -> Option<&[PathStep]> {
    if path.is_empty() {
        None
    } else {
        Some(&path[..path.len() - 1])
    }
}

/// Returns true when `child` is strictly below `ancestor`.
pub fn is_child(ancestor: &[PathStep], child: &[PathStep]) -> bool {
    child.len() > ancestor.len() && child[..ancestor.len()] == ancestor[..]
}

/// Splits a non-empty path into its parent and final step.
pub fn split_last(path: &[PathStep]) -> Option<(&[PathStep], &PathStep)> {
    let (parent, last) = path.split_at(path.len().checked_sub(1)?);
    Some((parent, &last[0]))
}

/// Resolves the value at `path`, if any.
///
/// Convenience wrapper over [`lookup`].
pub fn get<'a>(doc: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    lookup(doc, path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_empty_is_root() {
        assert_eq!(parse_pointer(""), Vec::<String>::new());
    }

    #[test]
    fn parse_format_roundtrip() {
        for ptr in ["", "/", "/foo", "/foo/bar", "/a~0b/c~1d", "/paths/~1pets/get", "/arr/0"] {
            let path = parse_pointer(ptr);
            assert_eq!(format_pointer(&path), ptr, "roundtrip of {ptr:?}");
        }
    }

    #[test]
    fn unescape_order_sensitive() {
        assert_eq!(unescape_step("~01"), "~1");
        assert_eq!(unescape_step("~10"), "/0");
        assert_eq!(escape_step("~1"), "~01");
        assert_eq!(escape_step("/pets"), "~1pets");
    }

    #[test]
    fn empty_step_is_preserved() {
        assert_eq!(parse_pointer("/"), vec![String::new()]);
        assert_eq!(parse_pointer("/foo/"), vec!["foo".to_string(), String::new()]);
    }

    #[test]
    fn validate_rejects_relative() {
        assert!(validate_pointer("").is_ok());
        assert!(validate_pointer("/foo").is_ok());
        assert!(validate_pointer("foo").is_err());
        assert!(parse_pointer_strict("foo/bar").is_err());
    }

    #[test]
    fn parent_and_child() {
        let path = parse_pointer("/paths/~1pets/get");
        assert_eq!(parent(&path), Some(&path[..2]));
        assert!(is_child(&path[..2], &path));
        assert!(!is_child(&path, &path));
        assert!(parent(&[]).is_none());
    }

    #[test]
    fn split_last_steps() {
        let path = parse_pointer("/info/title");
        let (par, last) = split_last(&path).unwrap();
        assert_eq!(par, &["info".to_string()][..]);
        assert_eq!(last, "title");
        assert!(split_last(&[]).is_none());
    }
}
