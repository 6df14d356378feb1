//! Command variants, kind tags, and the command error taxonomy.

use serde_json::Value;
use thiserror::Error;

use oasmith_node_pointer::{format_pointer, Path};

// ── Application record ────────────────────────────────────────────────────

/// What applying one command did, as needed to build its inverse.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Applied {
    /// The prior value the command replaced or removed, if any.
    pub displaced: Option<Value>,
    /// The container the command had to create, as a path from the root.
    pub created: Option<Path>,
    /// The array position a removed element occupied.
    pub index: Option<usize>,
}

impl Applied {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn displaced(value: Option<Value>) -> Self {
        Self {
            displaced: value,
            ..Self::default()
        }
    }

    pub fn removed(value: Value) -> Self {
        Self {
            displaced: Some(value),
            ..Self::default()
        }
    }
}

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error, PartialEq)]
pub enum CommandError {
    /// The command's node reference does not resolve in the current
    /// (possibly already-mutated) document.
    #[error("INVALID_TARGET: {0}")]
    InvalidTarget(String),
    /// The payload is shape-valid but semantically incompatible with the
    /// resolved target.
    #[error("INVALID_PAYLOAD: {0}")]
    InvalidPayload(String),
}

// ── HTTP methods ──────────────────────────────────────────────────────────

/// Operation methods recognized under a path item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Put,
    Post,
    Delete,
    Options,
    Head,
    Patch,
    Trace,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Put => "put",
            Method::Post => "post",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Head => "head",
            Method::Patch => "patch",
            Method::Trace => "trace",
        }
    }

    /// Parses a lowercase method name; anything else is a payload error.
    pub fn parse(s: &str) -> Result<Self, CommandError> {
        match s {
            "get" => Ok(Method::Get),
            "put" => Ok(Method::Put),
            "post" => Ok(Method::Post),
            "delete" => Ok(Method::Delete),
            "options" => Ok(Method::Options),
            "head" => Ok(Method::Head),
            "patch" => Ok(Method::Patch),
            "trace" => Ok(Method::Trace),
            other => Err(CommandError::InvalidPayload(format!(
                "unknown method: {other:?}"
            ))),
        }
    }
}

/// Validates a response status code: `default` or three ASCII digits.
pub fn validate_status_code(code: &str) -> Result<(), CommandError> {
    if code == "default" || (code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit())) {
        return Ok(());
    }
    Err(CommandError::InvalidPayload(format!(
        "invalid status code: {code:?}"
    )))
}

// ── Command enum ──────────────────────────────────────────────────────────

/// One deserializable, executable edit operation against a document.
///
/// The set of kinds is closed and versioned; see
/// [`crate::codec::REGISTRY_VERSION`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    SetTitle {
        title: String,
    },
    SetVersion {
        version: String,
    },
    SetDescription {
        description: String,
    },
    AddPath {
        path: String,
    },
    DeletePath {
        path: String,
    },
    RenamePath {
        from: String,
        to: String,
    },
    AddOperation {
        path: String,
        method: String,
    },
    DeleteOperation {
        path: String,
        method: String,
    },
    SetOperationSummary {
        path: String,
        method: String,
        summary: String,
    },
    AddResponse {
        path: String,
        method: String,
        status_code: String,
        description: Option<String>,
    },
    DeleteResponse {
        path: String,
        method: String,
        status_code: String,
    },
    AddSchemaDefinition {
        name: String,
        schema: Value,
    },
    DeleteSchemaDefinition {
        name: String,
    },
    AddTag {
        name: String,
        description: Option<String>,
    },
    DeleteTag {
        name: String,
    },
    SetNode {
        target: Path,
        value: Value,
    },
    PutNode {
        target: Path,
        value: Value,
    },
    DeleteNode {
        target: Path,
    },
}

impl Command {
    /// The wire kind tag.
    pub fn kind(&self) -> &'static str {
        match self {
            Command::SetTitle { .. } => "setTitle",
            Command::SetVersion { .. } => "setVersion",
            Command::SetDescription { .. } => "setDescription",
            Command::AddPath { .. } => "addPath",
            Command::DeletePath { .. } => "deletePath",
            Command::RenamePath { .. } => "renamePath",
            Command::AddOperation { .. } => "addOperation",
            Command::DeleteOperation { .. } => "deleteOperation",
            Command::SetOperationSummary { .. } => "setOperationSummary",
            Command::AddResponse { .. } => "addResponse",
            Command::DeleteResponse { .. } => "deleteResponse",
            Command::AddSchemaDefinition { .. } => "addSchemaDefinition",
            Command::DeleteSchemaDefinition { .. } => "deleteSchemaDefinition",
            Command::AddTag { .. } => "addTag",
            Command::DeleteTag { .. } => "deleteTag",
            Command::SetNode { .. } => "setNode",
            Command::PutNode { .. } => "putNode",
            Command::DeleteNode { .. } => "deleteNode",
        }
    }

    /// A one-line human summary for logging.
    pub fn summary(&self) -> String {
        match self {
            Command::SetTitle { title } => format!("set info title to {title:?}"),
            Command::SetVersion { version } => format!("set info version to {version:?}"),
            Command::SetDescription { .. } => "set info description".to_string(),
            Command::AddPath { path } => format!("add path item {path}"),
            Command::DeletePath { path } => format!("delete path item {path}"),
            Command::RenamePath { from, to } => format!("rename path item {from} -> {to}"),
            Command::AddOperation { path, method } => {
                format!("add operation {method} {path}")
            }
            Command::DeleteOperation { path, method } => {
                format!("delete operation {method} {path}")
            }
            Command::SetOperationSummary { path, method, .. } => {
                format!("set summary of {method} {path}")
            }
            Command::AddResponse {
                path,
                method,
                status_code,
                ..
            } => format!("add response {status_code} to {method} {path}"),
            Command::DeleteResponse {
                path,
                method,
                status_code,
            } => format!("delete response {status_code} from {method} {path}"),
            Command::AddSchemaDefinition { name, .. } => {
                format!("add schema definition {name}")
            }
            Command::DeleteSchemaDefinition { name } => {
                format!("delete schema definition {name}")
            }
            Command::AddTag { name, .. } => format!("add tag {name}"),
            Command::DeleteTag { name } => format!("delete tag {name}"),
            Command::SetNode { target, .. } => {
                format!("set node {}", format_pointer(target))
            }
            Command::PutNode { target, .. } => {
                format!("put node {}", format_pointer(target))
            }
            Command::DeleteNode { target } => {
                format!("delete node {}", format_pointer(target))
            }
        }
    }
}
