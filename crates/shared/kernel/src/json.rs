//! JSON object persistence.
//!
//! Files hold a single top-level object. Loading anything else is reported as
//! [`KernelError::MalformedData`]; saving creates missing parent directories and
//! writes pretty-printed UTF-8 with non-ASCII characters left unescaped.

use crate::error::{KernelError, KernelErrorExt};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use stencil_domain::record::Record;
use tracing::{debug, info};

/// Reads the JSON object stored at `path`.
///
/// # Errors
/// * [`KernelError::NotFound`] if the file does not exist.
/// * [`KernelError::MalformedData`] on invalid syntax or a non-object top level.
/// * [`KernelError::Io`] for any other read failure.
pub fn load_json_object(path: impl AsRef<Path>) -> Result<Record, KernelError> {
    let path = path.as_ref();
    debug!("Loading JSON file from: {}", path.display());

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(KernelError::NotFound {
                message: path.display().to_string().into(),
                context: None,
            });
        }
        Err(e) => return Err(e).context(format!("Reading {}", path.display())),
    };

    let value: Value = serde_json::from_str(&raw).map_err(|e| KernelError::MalformedData {
        message: format!("Invalid JSON in {}: {e}", path.display()).into(),
        context: None,
    })?;

    let Value::Object(object) = value else {
        return Err(KernelError::MalformedData {
            message: format!("Expected JSON object in {}, got {}", path.display(), kind(&value))
                .into(),
            context: None,
        });
    };

    debug!("JSON object contains {} keys", object.len());
    Ok(object)
}

/// Writes `object` to `path` as indented JSON, creating parent directories.
///
/// # Errors
/// Returns [`KernelError::Io`] if a directory or the file cannot be written.
pub fn save_json_object(object: &Record, path: impl AsRef<Path>) -> Result<(), KernelError> {
    let path = path.as_ref();

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            debug!("Creating directory: {}", parent.display());
        }
        fs::create_dir_all(parent).context(format!("Creating {}", parent.display()))?;
    }

    debug!("Writing {} keys to {}", object.len(), path.display());
    let encoded = serde_json::to_string_pretty(object).context("Encoding JSON object")?;
    fs::write(path, encoded).context(format!("Writing {}", path.display()))?;

    info!("Saved JSON file to {}", path.display());
    Ok(())
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
