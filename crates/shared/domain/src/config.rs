use crate::constants::{DEFAULT_CAPACITY, DEFAULT_VALIDATE_ON_INSERT};
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Top-level application settings.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfigInner {
    pub catalog: CatalogSettings,
    pub logging: LoggingSettings,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(flatten, default)]
    inner: Arc<AppConfigInner>,
}

impl Deref for AppConfig {
    type Target = AppConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for AppConfig {
    fn deref_mut(&mut self) -> &mut AppConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Raw catalog settings as read from a file or environment.
///
/// `capacity` is signed so that non-positive values survive parsing and are
/// rejected by the catalog with a proper configuration error.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    pub name: String,
    pub capacity: i64,
    pub validate_on_insert: bool,
}

/// Logging knobs consumed by the application entry point.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub directory: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            name: "default".to_owned(),
            capacity: DEFAULT_CAPACITY,
            validate_on_insert: DEFAULT_VALIDATE_ON_INSERT,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self { level: "info".to_owned(), directory: None, json: false }
    }
}
