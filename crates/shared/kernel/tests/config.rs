use std::fs;
use stencil_kernel::KernelError;
use stencil_kernel::config::load_config;
use stencil_kernel::domain::config::AppConfig;
use tempfile::tempdir;

#[test]
fn loads_toml_settings() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("stencil.toml");
    fs::write(
        &path,
        r#"
[catalog]
name = "inventory"
capacity = 2
validate_on_insert = false

[logging]
level = "debug"
"#,
    )?;

    let cfg: AppConfig = load_config(Some(&path))?;
    assert_eq!(cfg.catalog.name, "inventory");
    assert_eq!(cfg.catalog.capacity, 2);
    assert!(!cfg.catalog.validate_on_insert);
    assert_eq!(cfg.logging.level, "debug");
    assert!(!cfg.logging.json);
    Ok(())
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("temp dir");
    let err = load_config::<AppConfig>(Some(dir.path().join("nope.toml"))).unwrap_err();
    assert!(matches!(err, KernelError::Config { .. }));
    assert!(err.to_string().contains("Failed to build config"), "got {err}");
}
