//! Document model adapter for oasmith.
//!
//! Loads a raw textual API description into an in-memory tree, exposes
//! apply-time node resolution for commands, and serializes the tree back
//! to stable, human-diffable JSON. The adapter deliberately knows nothing
//! about individual command kinds; it is the narrow seam between the
//! replay engine and the underlying JSON representation.
//!
//! Key order is insertion order from the parse (serde_json's
//! `preserve_order` map), so re-serializing an unmodified document
//! reproduces the input's logical layout deterministically.

use serde_json::Value;
use thiserror::Error;

use oasmith_node_pointer::{lookup, lookup_mut, PathStep};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DocumentError {
    #[error("PARSE: {0}")]
    Parse(String),
    #[error("NOT_AN_OBJECT")]
    NotAnObject,
}

/// The description format a document declares at its root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    OpenApi3,
    Swagger2,
    AsyncApi,
    Unknown,
}

impl SpecFormat {
    /// Where schema definitions live for this format.
    pub fn definitions_path(&self) -> &'static [&'static str] {
        match self {
            SpecFormat::OpenApi3 | SpecFormat::AsyncApi | SpecFormat::Unknown => {
                &["components", "schemas"]
            }
            SpecFormat::Swagger2 => &["definitions"],
        }
    }
}

/// An in-memory API description tree.
///
/// Exclusively owned by one replay invocation at a time; commands mutate
/// it in place through [`Document::resolve_mut`] and [`Document::root_mut`].
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Loads a raw JSON document.
    ///
    /// The root must be a JSON object; every command kind targets object
    /// structure, so anything else is rejected up front.
    pub fn parse(raw: &str) -> Result<Self, DocumentError> {
        let root: Value =
            serde_json::from_str(raw).map_err(|e| DocumentError::Parse(e.to_string()))?;
        if !root.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        Ok(Self { root })
    }

    /// Wraps an already-parsed tree.
    pub fn from_value(root: Value) -> Result<Self, DocumentError> {
        if !root.is_object() {
            return Err(DocumentError::NotAnObject);
        }
        Ok(Self { root })
    }

    /// Serializes to pretty JSON: 2-space indent, insertion-order keys.
    ///
    /// Succeeds for every tree reachable through command application.
    pub fn to_pretty_json(&self) -> String {
        serde_json::to_string_pretty(&self.root)
            .expect("serializing an owned JSON tree cannot fail")
    }

    /// Detects the declared format from the root marker key.
    pub fn format(&self) -> SpecFormat {
        let obj = match self.root.as_object() {
            Some(o) => o,
            None => return SpecFormat::Unknown,
        };
        if obj.contains_key("openapi") {
            SpecFormat::OpenApi3
        } else if obj.contains_key("swagger") {
            SpecFormat::Swagger2
        } else if obj.contains_key("asyncapi") {
            SpecFormat::AsyncApi
        } else {
            SpecFormat::Unknown
        }
    }

    /// Resolves a node reference against the current tree.
    pub fn resolve(&self, path: &[PathStep]) -> Option<&Value> {
        lookup(&self.root, path)
    }

    /// Mutable counterpart of [`Document::resolve`].
    pub fn resolve_mut(&mut self, path: &[PathStep]) -> Option<&mut Value> {
        lookup_mut(&mut self.root, path)
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Value {
        &mut self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }
}
