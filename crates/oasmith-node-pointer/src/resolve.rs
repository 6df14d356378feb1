//! Path resolution against a live document tree.

use serde_json::Value;

use crate::PathStep;

/// Resolves the value at `path`, walking object keys and array indices.
///
/// Array steps must be decimal indices; the `-` end-of-array marker is a
/// write-side concept and never resolves on read.
pub fn lookup<'a>(doc: &'a Value, path: &[PathStep]) -> Option<&'a Value> {
    let mut current = doc;
    for step in path {
        match current {
            Value::Object(map) => {
                current = map.get(step)?;
            }
            Value::Array(arr) => {
                if step == "-" {
                    return None;
                }
                let idx: usize = step.parse().ok()?;
                current = arr.get(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}

/// Mutable counterpart of [`lookup`].
pub fn lookup_mut<'a>(doc: &'a mut Value, path: &[PathStep]) -> Option<&'a mut Value> {
    let mut current = doc;
    for step in path {
        match current {
            Value::Object(map) => {
                current = map.get_mut(step)?;
            }
            Value::Array(arr) => {
                if step == "-" {
                    return None;
                }
                let idx: usize = step.parse().ok()?;
                current = arr.get_mut(idx)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
