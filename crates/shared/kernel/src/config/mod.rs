use crate::error::{KernelError, KernelErrorExt};
use config::{Config, Environment, File};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use tracing::info;

/// Prefix for environment overrides (`STENCIL__CATALOG__CAPACITY=10`).
pub const ENV_PREFIX: &str = "STENCIL";

/// Base name of the settings file used when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "stencil";

/// Loads settings from a file layered with environment overrides.
///
/// 1. **Base File**: `path`, or `stencil.{toml,json,yaml,..}` in the working directory.
/// 2. **Environment Overrides**: variables prefixed with `STENCIL__`; nested keys are
///    separated by double underscores (`STENCIL__LOGGING__LEVEL` maps to `logging.level`).
///    Numeric and boolean values are parsed.
///
/// # Errors
/// Returns [`KernelError::Config`] if the file is missing, an override is malformed,
/// or the merged settings do not match `T`.
///
/// # Example
/// ```rust,no_run
/// use stencil_kernel::config::load_config;
/// use stencil_kernel::domain::config::AppConfig;
///
/// let cfg: AppConfig = load_config(Some("config/local")).unwrap_or_default();
/// ```
pub fn load_config<T>(path: Option<impl AsRef<Path>>) -> Result<T, KernelError>
where
    T: DeserializeOwned,
{
    let effective_path =
        path.map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), |p| p.as_ref().to_path_buf());

    let builder = Config::builder()
        .add_source(File::from(effective_path.as_path()).required(true))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .convert_case(config::Case::Snake)
                .try_parsing(true),
        );

    info!("Loading config from {}", effective_path.display());

    let config = builder
        .build()
        .context("Failed to build config")?
        .try_deserialize::<T>()
        .context("Failed to deserialize config")?;

    Ok(config)
}
