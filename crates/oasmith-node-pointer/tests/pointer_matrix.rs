use oasmith_node_pointer::{
    format_pointer, is_child, lookup, parent, parse_pointer, parse_pointer_strict, PointerError,
};
use serde_json::json;

#[test]
fn roundtrip_matrix() {
    let cases = [
        "",
        "/",
        "/openapi",
        "/info/title",
        "/paths/~1pets",
        "/paths/~1pets~1{id}/get/responses/200",
        "/a~0b/c~1d",
        "/components/schemas/Pet/properties/name",
    ];
    for ptr in cases {
        let path = parse_pointer(ptr);
        assert_eq!(format_pointer(&path), ptr, "roundtrip of {ptr:?}");
    }
}

#[test]
fn resolves_against_openapi_shape() {
    let doc = json!({
        "openapi": "3.0.0",
        "info": {"title": "Pets", "version": "1.0.0"},
        "paths": {
            "/pets": {
                "get": {"responses": {"200": {"description": "ok"}}}
            }
        }
    });
    let path = parse_pointer("/paths/~1pets/get/responses/200/description");
    assert_eq!(lookup(&doc, &path), Some(&json!("ok")));
}

#[test]
fn empty_key_steps_resolve() {
    let doc = json!({"": {"x": 1}, "foo": {"": 2}});
    assert_eq!(lookup(&doc, &parse_pointer("//x")), Some(&json!(1)));
    assert_eq!(lookup(&doc, &parse_pointer("/foo/")), Some(&json!(2)));
}

#[test]
fn strict_parse_rejects_relative_pointers() {
    assert!(matches!(
        parse_pointer_strict("paths//pets"),
        Err(PointerError::Invalid(_))
    ));
}

#[test]
fn child_relationships() {
    let root = parse_pointer("/paths");
    let item = parse_pointer("/paths/~1pets");
    let op = parse_pointer("/paths/~1pets/get");
    assert!(is_child(&root, &item));
    assert!(is_child(&root, &op));
    assert!(!is_child(&op, &root));
    assert_eq!(parent(&op).map(format_pointer), Some("/paths/~1pets".to_string()));
}
