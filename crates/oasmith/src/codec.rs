//! Wire codec: the command registry and marshaller.
//!
//! A wire command is a JSON object `{"kind": "<tag>", ...payload}`.
//! Unmarshalling resolves the kind tag against a closed, versioned table
//! of known kinds and validates the payload fields that kind requires.
//! The table is pure and read-only, so independent batches may be
//! unmarshalled concurrently.

use std::sync::OnceLock;

use indexmap::IndexMap;
use serde_json::{json, Map, Value};
use thiserror::Error;

use oasmith_node_pointer::{format_pointer, parse_pointer_strict, Path};

use crate::command::Command;

/// Version of the command kind table. Bumped whenever a kind is added,
/// removed, or changes payload shape.
pub const REGISTRY_VERSION: u32 = 1;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    /// The kind tag is not in the registry.
    #[error("UNKNOWN_COMMAND_KIND: {0}")]
    UnknownKind(String),
    /// The element is not valid JSON, not an object, or its payload is
    /// missing or mistypes a field its kind requires.
    #[error("MALFORMED_COMMAND: {0}")]
    Malformed(String),
}

// ── Payload field helpers ─────────────────────────────────────────────────

fn str_field(payload: &Map<String, Value>, name: &str) -> Result<String, WireError> {
    match payload.get(name) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(WireError::Malformed(format!("field {name:?} must be a string"))),
        None => Err(WireError::Malformed(format!("missing field {name:?}"))),
    }
}

fn opt_str_field(payload: &Map<String, Value>, name: &str) -> Result<Option<String>, WireError> {
    match payload.get(name) {
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Null) | None => Ok(None),
        Some(_) => Err(WireError::Malformed(format!("field {name:?} must be a string"))),
    }
}

fn any_field(payload: &Map<String, Value>, name: &str) -> Result<Value, WireError> {
    payload
        .get(name)
        .cloned()
        .ok_or_else(|| WireError::Malformed(format!("missing field {name:?}")))
}

fn object_field(payload: &Map<String, Value>, name: &str) -> Result<Value, WireError> {
    match payload.get(name) {
        Some(v @ Value::Object(_)) => Ok(v.clone()),
        Some(_) => Err(WireError::Malformed(format!("field {name:?} must be an object"))),
        None => Err(WireError::Malformed(format!("missing field {name:?}"))),
    }
}

fn pointer_field(payload: &Map<String, Value>, name: &str) -> Result<Path, WireError> {
    let raw = str_field(payload, name)?;
    parse_pointer_strict(&raw)
        .map_err(|e| WireError::Malformed(format!("field {name:?}: {e}")))
}

// ── Registry ──────────────────────────────────────────────────────────────

type DecodeFn = fn(&Map<String, Value>) -> Result<Command, WireError>;

fn registry() -> &'static IndexMap<&'static str, DecodeFn> {
    static REGISTRY: OnceLock<IndexMap<&'static str, DecodeFn>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut table: IndexMap<&'static str, DecodeFn> = IndexMap::new();
        table.insert("setTitle", |p| {
            Ok(Command::SetTitle { title: str_field(p, "title")? })
        });
        table.insert("setVersion", |p| {
            Ok(Command::SetVersion { version: str_field(p, "version")? })
        });
        table.insert("setDescription", |p| {
            Ok(Command::SetDescription { description: str_field(p, "description")? })
        });
        table.insert("addPath", |p| {
            Ok(Command::AddPath { path: str_field(p, "path")? })
        });
        table.insert("deletePath", |p| {
            Ok(Command::DeletePath { path: str_field(p, "path")? })
        });
        table.insert("renamePath", |p| {
            Ok(Command::RenamePath {
                from: str_field(p, "from")?,
                to: str_field(p, "to")?,
            })
        });
        table.insert("addOperation", |p| {
            Ok(Command::AddOperation {
                path: str_field(p, "path")?,
                method: str_field(p, "method")?,
            })
        });
        table.insert("deleteOperation", |p| {
            Ok(Command::DeleteOperation {
                path: str_field(p, "path")?,
                method: str_field(p, "method")?,
            })
        });
        table.insert("setOperationSummary", |p| {
            Ok(Command::SetOperationSummary {
                path: str_field(p, "path")?,
                method: str_field(p, "method")?,
                summary: str_field(p, "summary")?,
            })
        });
        table.insert("addResponse", |p| {
            Ok(Command::AddResponse {
                path: str_field(p, "path")?,
                method: str_field(p, "method")?,
                status_code: str_field(p, "statusCode")?,
                description: opt_str_field(p, "description")?,
            })
        });
        table.insert("deleteResponse", |p| {
            Ok(Command::DeleteResponse {
                path: str_field(p, "path")?,
                method: str_field(p, "method")?,
                status_code: str_field(p, "statusCode")?,
            })
        });
        table.insert("addSchemaDefinition", |p| {
            Ok(Command::AddSchemaDefinition {
                name: str_field(p, "name")?,
                schema: object_field(p, "schema")?,
            })
        });
        table.insert("deleteSchemaDefinition", |p| {
            Ok(Command::DeleteSchemaDefinition { name: str_field(p, "name")? })
        });
        table.insert("addTag", |p| {
            Ok(Command::AddTag {
                name: str_field(p, "name")?,
                description: opt_str_field(p, "description")?,
            })
        });
        table.insert("deleteTag", |p| {
            Ok(Command::DeleteTag { name: str_field(p, "name")? })
        });
        table.insert("setNode", |p| {
            Ok(Command::SetNode {
                target: pointer_field(p, "target")?,
                value: any_field(p, "value")?,
            })
        });
        table.insert("putNode", |p| {
            Ok(Command::PutNode {
                target: pointer_field(p, "target")?,
                value: any_field(p, "value")?,
            })
        });
        table.insert("deleteNode", |p| {
            Ok(Command::DeleteNode { target: pointer_field(p, "target")? })
        });
        table
    })
}

/// Registered kind tags, in declaration order.
pub fn known_kinds() -> impl Iterator<Item = &'static str> {
    registry().keys().copied()
}

// ── Unmarshalling ─────────────────────────────────────────────────────────

/// Materializes a typed [`Command`] from one serialized wire element.
pub fn unmarshall(wire: &str) -> Result<Command, WireError> {
    let value: Value = serde_json::from_str(wire)
        .map_err(|e| WireError::Malformed(format!("not valid JSON: {e}")))?;
    unmarshall_value(&value)
}

/// As [`unmarshall`], for an already-parsed wire object.
pub fn unmarshall_value(value: &Value) -> Result<Command, WireError> {
    let payload = value
        .as_object()
        .ok_or_else(|| WireError::Malformed("wire command must be an object".to_string()))?;
    let kind = match payload.get("kind") {
        Some(Value::String(k)) => k.as_str(),
        Some(_) => return Err(WireError::Malformed("field \"kind\" must be a string".into())),
        None => return Err(WireError::Malformed("missing field \"kind\"".into())),
    };
    let decode = registry()
        .get(kind)
        .ok_or_else(|| WireError::UnknownKind(kind.to_string()))?;
    decode(payload)
}

// ── Marshalling ───────────────────────────────────────────────────────────

/// Serializes a [`Command`] back to its wire object.
///
/// `unmarshall` of the result reproduces the command for every kind.
pub fn marshall(command: &Command) -> Value {
    let kind = command.kind();
    match command {
        Command::SetTitle { title } => json!({ "kind": kind, "title": title }),
        Command::SetVersion { version } => json!({ "kind": kind, "version": version }),
        Command::SetDescription { description } => {
            json!({ "kind": kind, "description": description })
        }
        Command::AddPath { path } | Command::DeletePath { path } => {
            json!({ "kind": kind, "path": path })
        }
        Command::RenamePath { from, to } => json!({ "kind": kind, "from": from, "to": to }),
        Command::AddOperation { path, method } | Command::DeleteOperation { path, method } => {
            json!({ "kind": kind, "path": path, "method": method })
        }
        Command::SetOperationSummary { path, method, summary } => {
            json!({ "kind": kind, "path": path, "method": method, "summary": summary })
        }
        Command::AddResponse { path, method, status_code, description } => {
            let mut m = Map::new();
            m.insert("kind".to_string(), json!(kind));
            m.insert("path".to_string(), json!(path));
            m.insert("method".to_string(), json!(method));
            m.insert("statusCode".to_string(), json!(status_code));
            if let Some(d) = description {
                m.insert("description".to_string(), json!(d));
            }
            Value::Object(m)
        }
        Command::DeleteResponse { path, method, status_code } => {
            json!({ "kind": kind, "path": path, "method": method, "statusCode": status_code })
        }
        Command::AddSchemaDefinition { name, schema } => {
            json!({ "kind": kind, "name": name, "schema": schema })
        }
        Command::DeleteSchemaDefinition { name } | Command::DeleteTag { name } => {
            json!({ "kind": kind, "name": name })
        }
        Command::AddTag { name, description } => {
            let mut m = Map::new();
            m.insert("kind".to_string(), json!(kind));
            m.insert("name".to_string(), json!(name));
            if let Some(d) = description {
                m.insert("description".to_string(), json!(d));
            }
            Value::Object(m)
        }
        Command::SetNode { target, value } | Command::PutNode { target, value } => {
            json!({ "kind": kind, "target": format_pointer(target), "value": value })
        }
        Command::DeleteNode { target } => {
            json!({ "kind": kind, "target": format_pointer(target) })
        }
    }
}
