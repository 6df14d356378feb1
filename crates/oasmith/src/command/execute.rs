//! Command application and inverse construction.
//!
//! `execute` mutates the document in place and returns an [`Applied`]
//! record: the displaced prior value, the container the command had to
//! create, and the array position a removed element occupied. `inverse`
//! turns that record back into a reversing command for the editor host's
//! undo stack.

use serde_json::{Map, Value};

use oasmith_document::Document;
use oasmith_node_pointer::{format_pointer, split_last, Path, PathStep};

use super::types::{validate_status_code, Applied, Command, CommandError, Method};

// ── Target helpers ────────────────────────────────────────────────────────

fn invalid_target(path: &[PathStep]) -> CommandError {
    CommandError::InvalidTarget(format_pointer(path))
}

fn already_defined(what: &str, name: &str) -> CommandError {
    CommandError::InvalidPayload(format!("{what} already defined: {name}"))
}

fn root_object(doc: &mut Document) -> Result<&mut Map<String, Value>, CommandError> {
    doc.root_mut()
        .as_object_mut()
        .ok_or_else(|| CommandError::InvalidTarget("document root is not an object".to_string()))
}

/// Gets or creates an object-valued child of `map`.
fn ensure_object<'a>(
    map: &'a mut Map<String, Value>,
    key: &str,
) -> Result<&'a mut Map<String, Value>, CommandError> {
    map.entry(key.to_string())
        .or_insert_with(|| Value::Object(Map::new()))
        .as_object_mut()
        .ok_or_else(|| CommandError::InvalidTarget(format!("/{key} is not an object")))
}

/// Resolves an existing object node, erroring with the full pointer.
fn object_at<'a>(
    doc: &'a mut Document,
    steps: &[PathStep],
) -> Result<&'a mut Map<String, Value>, CommandError> {
    match doc.resolve_mut(steps) {
        Some(Value::Object(map)) => Ok(map),
        _ => Err(invalid_target(steps)),
    }
}

fn path_item_steps(path: &str) -> Path {
    vec!["paths".to_string(), path.to_string()]
}

fn operation_steps(path: &str, method: &Method) -> Path {
    vec![
        "paths".to_string(),
        path.to_string(),
        method.as_str().to_string(),
    ]
}

/// A root-level container path, recorded only when the key was absent.
fn created_root_container(existed: bool, key: &str) -> Option<Path> {
    (!existed).then(|| vec![key.to_string()])
}

fn set_info_field(
    doc: &mut Document,
    field: &str,
    value: Value,
) -> Result<Applied, CommandError> {
    let root = root_object(doc)?;
    let had_info = root.contains_key("info");
    let info = ensure_object(root, "info")?;
    Ok(Applied {
        displaced: info.insert(field.to_string(), value),
        created: created_root_container(had_info, "info"),
        index: None,
    })
}

fn info_field_inverse(field: &str, applied: &Applied) -> Command {
    if let Some(created) = &applied.created {
        return Command::DeleteNode {
            target: created.clone(),
        };
    }
    let target = vec!["info".to_string(), field.to_string()];
    match &applied.displaced {
        Some(value) => Command::PutNode {
            target,
            value: value.clone(),
        },
        None => Command::DeleteNode { target },
    }
}

/// Removes the container `execute` created, or falls back to the plain
/// reversing command when none was.
fn delete_created_or(applied: &Applied, fallback: Command) -> Command {
    match &applied.created {
        Some(created) => Command::DeleteNode {
            target: created.clone(),
        },
        None => fallback,
    }
}

// ── Execution ─────────────────────────────────────────────────────────────

impl Command {
    /// Applies this command to the document, mutating it in place.
    ///
    /// The returned record carries everything `inverse` needs. Must be
    /// called at most once per instance; re-invoking against an
    /// already-edited tree is undefined behavior.
    pub fn execute(&self, doc: &mut Document) -> Result<Applied, CommandError> {
        match self {
            Command::SetTitle { title } => {
                set_info_field(doc, "title", Value::String(title.clone()))
            }
            Command::SetVersion { version } => {
                set_info_field(doc, "version", Value::String(version.clone()))
            }
            Command::SetDescription { description } => {
                set_info_field(doc, "description", Value::String(description.clone()))
            }

            Command::AddPath { path } => {
                let root = root_object(doc)?;
                let had_paths = root.contains_key("paths");
                let paths = ensure_object(root, "paths")?;
                if paths.contains_key(path) {
                    return Err(already_defined("path item", path));
                }
                paths.insert(path.clone(), Value::Object(Map::new()));
                Ok(Applied {
                    created: created_root_container(had_paths, "paths"),
                    ..Applied::none()
                })
            }
            Command::DeletePath { path } => {
                let steps = path_item_steps(path);
                let paths = object_at(doc, &steps[..1])?;
                match paths.remove(path) {
                    Some(item) => Ok(Applied::removed(item)),
                    None => Err(invalid_target(&steps)),
                }
            }
            Command::RenamePath { from, to } => {
                let steps = path_item_steps(from);
                let paths = object_at(doc, &steps[..1])?;
                if paths.contains_key(to) {
                    return Err(already_defined("path item", to));
                }
                match paths.remove(from) {
                    Some(item) => {
                        paths.insert(to.clone(), item);
                        Ok(Applied::none())
                    }
                    None => Err(invalid_target(&steps)),
                }
            }

            Command::AddOperation { path, method } => {
                let method = Method::parse(method)?;
                let item = object_at(doc, &path_item_steps(path))?;
                if item.contains_key(method.as_str()) {
                    return Err(already_defined("operation", method.as_str()));
                }
                item.insert(method.as_str().to_string(), Value::Object(Map::new()));
                Ok(Applied::none())
            }
            Command::DeleteOperation { path, method } => {
                let method = Method::parse(method)?;
                let item = object_at(doc, &path_item_steps(path))?;
                match item.remove(method.as_str()) {
                    Some(op) => Ok(Applied::removed(op)),
                    None => Err(invalid_target(&operation_steps(path, &method))),
                }
            }
            Command::SetOperationSummary {
                path,
                method,
                summary,
            } => {
                let method = Method::parse(method)?;
                let op = object_at(doc, &operation_steps(path, &method))?;
                Ok(Applied::displaced(
                    op.insert("summary".to_string(), Value::String(summary.clone())),
                ))
            }

            Command::AddResponse {
                path,
                method,
                status_code,
                description,
            } => {
                let method = Method::parse(method)?;
                validate_status_code(status_code)?;
                let op = object_at(doc, &operation_steps(path, &method))?;
                let had_responses = op.contains_key("responses");
                let responses = ensure_object(op, "responses")?;
                if responses.contains_key(status_code) {
                    return Err(already_defined("response", status_code));
                }
                let mut body = Map::new();
                body.insert(
                    "description".to_string(),
                    Value::String(description.clone().unwrap_or_default()),
                );
                responses.insert(status_code.clone(), Value::Object(body));
                let created = (!had_responses).then(|| {
                    let mut steps = operation_steps(path, &method);
                    steps.push("responses".to_string());
                    steps
                });
                Ok(Applied {
                    created,
                    ..Applied::none()
                })
            }
            Command::DeleteResponse {
                path,
                method,
                status_code,
            } => {
                let method = Method::parse(method)?;
                let mut steps = operation_steps(path, &method);
                steps.push("responses".to_string());
                let responses = object_at(doc, &steps)?;
                let removed = responses.remove(status_code);
                steps.push(status_code.clone());
                match removed {
                    Some(response) => Ok(Applied::removed(response)),
                    None => Err(invalid_target(&steps)),
                }
            }

            Command::AddSchemaDefinition { name, schema } => {
                if !schema.is_object() {
                    return Err(CommandError::InvalidPayload(
                        "schema must be an object".to_string(),
                    ));
                }
                let segments = doc.format().definitions_path();
                let mut container = root_object(doc)?;
                let mut walked: Path = Vec::new();
                let mut created: Option<Path> = None;
                for segment in segments {
                    let absent = !container.contains_key(*segment);
                    walked.push(segment.to_string());
                    if absent && created.is_none() {
                        created = Some(walked.clone());
                    }
                    container = ensure_object(container, segment)?;
                }
                if container.contains_key(name) {
                    return Err(already_defined("schema definition", name));
                }
                container.insert(name.clone(), schema.clone());
                Ok(Applied {
                    created,
                    ..Applied::none()
                })
            }
            Command::DeleteSchemaDefinition { name } => {
                let mut steps: Path = doc
                    .format()
                    .definitions_path()
                    .iter()
                    .map(|s| s.to_string())
                    .collect();
                let container = object_at(doc, &steps)?;
                let removed = container.remove(name);
                steps.push(name.clone());
                match removed {
                    Some(schema) => Ok(Applied::removed(schema)),
                    None => Err(invalid_target(&steps)),
                }
            }

            Command::AddTag { name, description } => {
                let root = root_object(doc)?;
                let had_tags = root.contains_key("tags");
                let tags = match root
                    .entry("tags".to_string())
                    .or_insert_with(|| Value::Array(Vec::new()))
                {
                    Value::Array(arr) => arr,
                    _ => return Err(CommandError::InvalidTarget("/tags".to_string())),
                };
                let exists = tags
                    .iter()
                    .any(|t| t.get("name").and_then(Value::as_str) == Some(name.as_str()));
                if exists {
                    return Err(already_defined("tag", name));
                }
                let mut tag = Map::new();
                tag.insert("name".to_string(), Value::String(name.clone()));
                if let Some(d) = description {
                    tag.insert("description".to_string(), Value::String(d.clone()));
                }
                tags.push(Value::Object(tag));
                Ok(Applied {
                    created: created_root_container(had_tags, "tags"),
                    ..Applied::none()
                })
            }
            Command::DeleteTag { name } => {
                let root = root_object(doc)?;
                let tags = match root.get_mut("tags") {
                    Some(Value::Array(arr)) => arr,
                    _ => return Err(CommandError::InvalidTarget("/tags".to_string())),
                };
                let idx = tags
                    .iter()
                    .position(|t| t.get("name").and_then(Value::as_str) == Some(name.as_str()))
                    .ok_or_else(|| {
                        CommandError::InvalidTarget(format!("/tags (no tag named {name:?})"))
                    })?;
                Ok(Applied {
                    displaced: Some(tags.remove(idx)),
                    created: None,
                    index: Some(idx),
                })
            }

            Command::SetNode { target, value } => {
                if target.is_empty() && !value.is_object() {
                    return Err(CommandError::InvalidPayload(
                        "document root must be an object".to_string(),
                    ));
                }
                match doc.resolve_mut(target) {
                    Some(node) => Ok(Applied::removed(std::mem::replace(node, value.clone()))),
                    None => Err(invalid_target(target)),
                }
            }
            Command::PutNode { target, value } => match split_last(target) {
                None => {
                    if !value.is_object() {
                        return Err(CommandError::InvalidPayload(
                            "document root must be an object".to_string(),
                        ));
                    }
                    Ok(Applied::removed(std::mem::replace(
                        doc.root_mut(),
                        value.clone(),
                    )))
                }
                Some((parent, key)) => {
                    let parent_node = doc
                        .resolve_mut(parent)
                        .ok_or_else(|| invalid_target(parent))?;
                    match parent_node {
                        Value::Object(map) => {
                            Ok(Applied::displaced(map.insert(key.clone(), value.clone())))
                        }
                        Value::Array(arr) => {
                            if key == "-" {
                                arr.push(value.clone());
                                return Ok(Applied::none());
                            }
                            let idx: usize =
                                key.parse().map_err(|_| invalid_target(target))?;
                            if idx > arr.len() {
                                return Err(invalid_target(target));
                            }
                            arr.insert(idx, value.clone());
                            Ok(Applied::none())
                        }
                        _ => Err(invalid_target(parent)),
                    }
                }
            },
            Command::DeleteNode { target } => match split_last(target) {
                None => Err(CommandError::InvalidTarget(
                    "cannot delete the document root".to_string(),
                )),
                Some((parent, key)) => {
                    let parent_node = doc
                        .resolve_mut(parent)
                        .ok_or_else(|| invalid_target(target))?;
                    match parent_node {
                        Value::Object(map) => match map.remove(key) {
                            Some(old) => Ok(Applied::removed(old)),
                            None => Err(invalid_target(target)),
                        },
                        Value::Array(arr) => {
                            let idx: usize =
                                key.parse().map_err(|_| invalid_target(target))?;
                            if idx >= arr.len() {
                                return Err(invalid_target(target));
                            }
                            Ok(Applied {
                                displaced: Some(arr.remove(idx)),
                                created: None,
                                index: Some(idx),
                            })
                        }
                        _ => Err(invalid_target(target)),
                    }
                }
            },
        }
    }

    /// Builds the command reversing this one, given what `execute` did.
    /// `None` when no clean inverse exists (e.g. an append to the end of
    /// an array).
    pub fn inverse(&self, applied: &Applied) -> Option<Command> {
        match self {
            Command::SetTitle { .. } => Some(info_field_inverse("title", applied)),
            Command::SetVersion { .. } => Some(info_field_inverse("version", applied)),
            Command::SetDescription { .. } => {
                Some(info_field_inverse("description", applied))
            }

            Command::AddPath { path } => Some(delete_created_or(
                applied,
                Command::DeletePath { path: path.clone() },
            )),
            Command::DeletePath { path } => {
                applied.displaced.clone().map(|item| Command::PutNode {
                    target: path_item_steps(path),
                    value: item,
                })
            }
            Command::RenamePath { from, to } => Some(Command::RenamePath {
                from: to.clone(),
                to: from.clone(),
            }),

            Command::AddOperation { path, method } => Some(Command::DeleteOperation {
                path: path.clone(),
                method: method.clone(),
            }),
            Command::DeleteOperation { path, method } => {
                applied.displaced.clone().map(|op| Command::PutNode {
                    target: vec!["paths".to_string(), path.clone(), method.clone()],
                    value: op,
                })
            }
            Command::SetOperationSummary { path, method, .. } => {
                let target = vec![
                    "paths".to_string(),
                    path.clone(),
                    method.clone(),
                    "summary".to_string(),
                ];
                Some(match &applied.displaced {
                    Some(value) => Command::PutNode {
                        target,
                        value: value.clone(),
                    },
                    None => Command::DeleteNode { target },
                })
            }

            Command::AddResponse {
                path,
                method,
                status_code,
                ..
            } => Some(delete_created_or(
                applied,
                Command::DeleteResponse {
                    path: path.clone(),
                    method: method.clone(),
                    status_code: status_code.clone(),
                },
            )),
            Command::DeleteResponse {
                path,
                method,
                status_code,
            } => applied.displaced.clone().map(|response| Command::PutNode {
                target: vec![
                    "paths".to_string(),
                    path.clone(),
                    method.clone(),
                    "responses".to_string(),
                    status_code.clone(),
                ],
                value: response,
            }),

            Command::AddSchemaDefinition { name, .. } => Some(delete_created_or(
                applied,
                Command::DeleteSchemaDefinition { name: name.clone() },
            )),
            Command::DeleteSchemaDefinition { name } => {
                applied.displaced.clone().map(|schema| Command::AddSchemaDefinition {
                    name: name.clone(),
                    schema,
                })
            }

            Command::AddTag { name, .. } => Some(delete_created_or(
                applied,
                Command::DeleteTag { name: name.clone() },
            )),
            // Restores the removed tag verbatim at its original position.
            Command::DeleteTag { .. } => match (&applied.displaced, applied.index) {
                (Some(tag), Some(idx)) => Some(Command::PutNode {
                    target: vec!["tags".to_string(), idx.to_string()],
                    value: tag.clone(),
                }),
                _ => None,
            },

            Command::SetNode { target, .. } => {
                applied.displaced.clone().map(|old| Command::SetNode {
                    target: target.clone(),
                    value: old,
                })
            }
            Command::PutNode { target, .. } => {
                if target.last().is_some_and(|step| step == "-") {
                    return None;
                }
                Some(match &applied.displaced {
                    Some(old) => Command::PutNode {
                        target: target.clone(),
                        value: old.clone(),
                    },
                    None => Command::DeleteNode {
                        target: target.clone(),
                    },
                })
            }
            Command::DeleteNode { target } => {
                applied.displaced.clone().map(|old| Command::PutNode {
                    target: target.clone(),
                    value: old,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oasmith_node_pointer::parse_pointer;
    use serde_json::json;

    fn doc(v: Value) -> Document {
        Document::from_value(v).unwrap()
    }

    #[test]
    fn add_path_creates_paths_container() {
        let mut d = doc(json!({"openapi": "3.0.0"}));
        Command::AddPath { path: "/pets".into() }.execute(&mut d).unwrap();
        assert_eq!(d.root()["paths"]["/pets"], json!({}));
    }

    #[test]
    fn add_path_duplicate_is_payload_error() {
        let mut d = doc(json!({"openapi": "3.0.0", "paths": {"/pets": {}}}));
        let err = Command::AddPath { path: "/pets".into() }
            .execute(&mut d)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPayload(_)));
    }

    #[test]
    fn add_operation_requires_existing_path_item() {
        let mut d = doc(json!({"openapi": "3.0.0", "paths": {}}));
        let err = Command::AddOperation {
            path: "/pets".into(),
            method: "get".into(),
        }
        .execute(&mut d)
        .unwrap_err();
        assert_eq!(err, CommandError::InvalidTarget("/paths/~1pets".into()));
    }

    #[test]
    fn add_operation_rejects_unknown_method() {
        let mut d = doc(json!({"paths": {"/pets": {}}}));
        let err = Command::AddOperation {
            path: "/pets".into(),
            method: "fetch".into(),
        }
        .execute(&mut d)
        .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPayload(_)));
    }

    #[test]
    fn rename_path_moves_the_item() {
        let mut d = doc(json!({"paths": {"/pets": {"get": {}}}}));
        Command::RenamePath {
            from: "/pets".into(),
            to: "/animals".into(),
        }
        .execute(&mut d)
        .unwrap();
        assert!(d.root()["paths"].get("/pets").is_none());
        assert_eq!(d.root()["paths"]["/animals"], json!({"get": {}}));
    }

    #[test]
    fn add_response_creates_responses_container() {
        let mut d = doc(json!({"paths": {"/pets": {"get": {}}}}));
        Command::AddResponse {
            path: "/pets".into(),
            method: "get".into(),
            status_code: "200".into(),
            description: Some("ok".into()),
        }
        .execute(&mut d)
        .unwrap();
        assert_eq!(
            d.root()["paths"]["/pets"]["get"]["responses"]["200"],
            json!({"description": "ok"})
        );
    }

    #[test]
    fn add_response_rejects_bad_status_code() {
        let mut d = doc(json!({"paths": {"/pets": {"get": {}}}}));
        let err = Command::AddResponse {
            path: "/pets".into(),
            method: "get".into(),
            status_code: "2xx".into(),
            description: None,
        }
        .execute(&mut d)
        .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPayload(_)));
    }

    #[test]
    fn schema_definition_container_follows_format() {
        let mut openapi = doc(json!({"openapi": "3.0.0"}));
        let mut swagger = doc(json!({"swagger": "2.0"}));
        let cmd = Command::AddSchemaDefinition {
            name: "Pet".into(),
            schema: json!({"type": "object"}),
        };
        cmd.execute(&mut openapi).unwrap();
        cmd.clone().execute(&mut swagger).unwrap();
        assert_eq!(
            openapi.root()["components"]["schemas"]["Pet"],
            json!({"type": "object"})
        );
        assert_eq!(swagger.root()["definitions"]["Pet"], json!({"type": "object"}));
    }

    #[test]
    fn add_schema_definition_rejects_non_object_schema() {
        let mut d = doc(json!({"openapi": "3.0.0"}));
        let err = Command::AddSchemaDefinition {
            name: "Pet".into(),
            schema: json!("string"),
        }
        .execute(&mut d)
        .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPayload(_)));
    }

    #[test]
    fn tags_append_and_delete_by_name() {
        let mut d = doc(json!({"openapi": "3.0.0"}));
        Command::AddTag {
            name: "pets".into(),
            description: Some("pet things".into()),
        }
        .execute(&mut d)
        .unwrap();
        Command::AddTag { name: "store".into(), description: None }
            .execute(&mut d)
            .unwrap();
        assert_eq!(d.root()["tags"].as_array().unwrap().len(), 2);

        let applied = Command::DeleteTag { name: "pets".into() }
            .execute(&mut d)
            .unwrap();
        assert_eq!(
            applied.displaced,
            Some(json!({"name": "pets", "description": "pet things"}))
        );
        assert_eq!(applied.index, Some(0));
        assert_eq!(d.root()["tags"], json!([{"name": "store"}]));
    }

    #[test]
    fn duplicate_tag_is_payload_error() {
        let mut d = doc(json!({"tags": [{"name": "pets"}]}));
        let err = Command::AddTag { name: "pets".into(), description: None }
            .execute(&mut d)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPayload(_)));
    }

    #[test]
    fn set_node_replaces_and_returns_displaced() {
        let mut d = doc(json!({"info": {"title": "old"}}));
        let applied = Command::SetNode {
            target: parse_pointer("/info/title"),
            value: json!("new"),
        }
        .execute(&mut d)
        .unwrap();
        assert_eq!(applied.displaced, Some(json!("old")));
        assert_eq!(d.root()["info"]["title"], json!("new"));
    }

    #[test]
    fn set_node_requires_existing_target() {
        let mut d = doc(json!({"info": {}}));
        let err = Command::SetNode {
            target: parse_pointer("/info/title"),
            value: json!("x"),
        }
        .execute(&mut d)
        .unwrap_err();
        assert_eq!(err, CommandError::InvalidTarget("/info/title".into()));
    }

    #[test]
    fn put_node_inserts_into_arrays() {
        let mut d = doc(json!({"servers": [{"url": "a"}, {"url": "c"}]}));
        Command::PutNode {
            target: parse_pointer("/servers/1"),
            value: json!({"url": "b"}),
        }
        .execute(&mut d)
        .unwrap();
        Command::PutNode {
            target: parse_pointer("/servers/-"),
            value: json!({"url": "d"}),
        }
        .execute(&mut d)
        .unwrap();
        assert_eq!(
            d.root()["servers"],
            json!([{"url": "a"}, {"url": "b"}, {"url": "c"}, {"url": "d"}])
        );
    }

    #[test]
    fn delete_node_refuses_the_root() {
        let mut d = doc(json!({"a": 1}));
        let err = Command::DeleteNode { target: vec![] }.execute(&mut d).unwrap_err();
        assert!(matches!(err, CommandError::InvalidTarget(_)));
    }

    #[test]
    fn root_replacement_must_stay_an_object() {
        let mut d = doc(json!({"a": 1}));
        let err = Command::SetNode { target: vec![], value: json!(42) }
            .execute(&mut d)
            .unwrap_err();
        assert!(matches!(err, CommandError::InvalidPayload(_)));
    }

    #[test]
    fn inverse_round_trips_a_delete() {
        let before = json!({"paths": {"/pets": {"get": {"summary": "s"}}}});
        let mut d = doc(before.clone());
        let cmd = Command::DeletePath { path: "/pets".into() };
        let applied = cmd.execute(&mut d).unwrap();
        let undo = cmd.inverse(&applied).unwrap();
        undo.execute(&mut d).unwrap();
        assert_eq!(d.root(), &before);
    }

    #[test]
    fn inverse_of_set_title_restores_or_deletes() {
        let before = json!({"openapi": "3.0.0"});
        let mut d = doc(before.clone());
        let cmd = Command::SetTitle { title: "Pets".into() };
        let applied = cmd.execute(&mut d).unwrap();
        assert_eq!(applied.displaced, None);
        assert_eq!(applied.created, Some(vec!["info".to_string()]));
        let undo = cmd.inverse(&applied).unwrap();
        undo.execute(&mut d).unwrap();
        assert_eq!(d.root(), &before);

        let mut d2 = doc(json!({"info": {"title": "Old"}}));
        let applied2 = cmd.execute(&mut d2).unwrap();
        let undo2 = cmd.inverse(&applied2).unwrap();
        undo2.execute(&mut d2).unwrap();
        assert_eq!(d2.root()["info"]["title"], json!("Old"));
    }

    #[test]
    fn inverse_of_delete_tag_restores_position_and_fields() {
        let before = json!({"tags": [
            {"name": "pets"},
            {"name": "store", "description": "storefront",
             "externalDocs": {"url": "https://example.com/store"}},
            {"name": "users"},
        ]});
        let mut d = doc(before.clone());
        let cmd = Command::DeleteTag { name: "store".into() };
        let applied = cmd.execute(&mut d).unwrap();
        assert_eq!(applied.index, Some(1));
        let undo = cmd.inverse(&applied).unwrap();
        undo.execute(&mut d).unwrap();
        assert_eq!(d.root(), &before);
    }

    #[test]
    fn inverse_of_add_removes_a_created_container() {
        let before = json!({"openapi": "3.0.0"});
        let mut d = doc(before.clone());
        let cmd = Command::AddPath { path: "/pets".into() };
        let applied = cmd.execute(&mut d).unwrap();
        let undo = cmd.inverse(&applied).unwrap();
        undo.execute(&mut d).unwrap();
        assert_eq!(d.root(), &before);

        // Pre-existing containers survive the undo untouched.
        let mut d2 = doc(json!({"paths": {"/stores": {}}}));
        let applied2 = cmd.execute(&mut d2).unwrap();
        assert_eq!(applied2.created, None);
        cmd.inverse(&applied2).unwrap().execute(&mut d2).unwrap();
        assert_eq!(d2.root(), &json!({"paths": {"/stores": {}}}));
    }

    #[test]
    fn inverse_of_add_schema_definition_prunes_created_levels() {
        let before = json!({"openapi": "3.0.0", "components": {"securitySchemes": {}}});
        let mut d = doc(before.clone());
        let cmd = Command::AddSchemaDefinition {
            name: "Pet".into(),
            schema: json!({"type": "object"}),
        };
        let applied = cmd.execute(&mut d).unwrap();
        assert_eq!(
            applied.created,
            Some(vec!["components".to_string(), "schemas".to_string()])
        );
        cmd.inverse(&applied).unwrap().execute(&mut d).unwrap();
        assert_eq!(d.root(), &before);
    }

    #[test]
    fn inverse_of_array_append_is_none() {
        let cmd = Command::PutNode {
            target: parse_pointer("/tags/-"),
            value: json!({"name": "x"}),
        };
        assert_eq!(cmd.inverse(&Applied::none()), None);
    }
}
