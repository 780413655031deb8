use serde_json::{Value, json};
use std::fs;
use stencil_kernel::KernelError;
use stencil_kernel::json::{load_json_object, save_json_object};
use tempfile::tempdir;

#[test]
fn save_then_load_round_trips() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("deeply").join("nested").join("data.json");
    let original = json!({
        "id": 1,
        "name": "item1",
        "tags": ["a", "b"],
        "meta": { "active": true, "score": 9.5, "note": null }
    });
    let object = original.as_object().expect("object literal");

    save_json_object(object, &path)?;
    let loaded = load_json_object(&path)?;

    assert_eq!(Value::Object(loaded), original);
    Ok(())
}

#[test]
fn missing_file_is_not_found() {
    let dir = tempdir().expect("temp dir");
    let err = load_json_object(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, KernelError::NotFound { .. }), "got {err}");
}

#[test]
fn invalid_syntax_is_malformed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"a\": ").expect("write");

    let err = load_json_object(&path).unwrap_err();
    assert!(matches!(err, KernelError::MalformedData { .. }), "got {err}");
}

#[test]
fn non_object_top_level_is_malformed() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("list.json");
    fs::write(&path, "[1, 2, 3]").expect("write");

    let err = load_json_object(&path).unwrap_err();
    assert!(matches!(err, KernelError::MalformedData { .. }));
    assert!(err.to_string().contains("got array"), "got {err}");
}
