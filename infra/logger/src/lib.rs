//! # Logger
//!
//! Explicit logging bootstrap for stencil applications.
//! It configures console and file logging with rotation, non-blocking I/O and
//! environment-based filtering. Nothing is installed implicitly: the owning
//! application calls [`LoggerBuilder::init`] exactly once.
//!
//! * `LOG_LEVEL` (`DEBUG`, `INFO`, `WARN`/`WARNING`, `ERROR`/`CRITICAL`, `TRACE`)
//!   overrides the level passed to [`LoggerBuilder::level`].
//! * `RUST_LOG` directives apply unless [`LoggerBuilder::env_filter`] sets them explicitly.
//! * The level can be changed after startup with [`Logger::set_level`].
//! * [`instrument::log_call`] wraps a single call with argument/result logging.
//!
//! ## Example
//!
//! ```rust
//! # use stencil_logger::{Logger, LevelFilter};
//!
//! let _logger = Logger::builder()
//!     .name("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;
pub mod instrument;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use private::Sealed;
use std::fmt;
use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, reload};

/// Environment variable that overrides the configured level.
pub const LOG_LEVEL_ENV: &str = "LOG_LEVEL";

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// Default targets capped at `WARN` unless the effective level is `DEBUG` or finer.
///
/// Transport and runtime crates that applications built on this logger commonly
/// pull in. Replace the list with [`LoggerBuilder::quiet_targets`].
pub const QUIET_TARGETS: &[&str] = &["hyper", "h2", "mio"];

type FilterHandle = reload::Handle<EnvFilter, Registry>;

#[derive(Debug)]
pub struct LoggerConfig {
    console: bool,
    stderr: bool,
    path: Option<PathBuf>,
    level: LevelFilter,
    rotation: Rotation,
    max_files: usize,
    json: bool,
    env_filter: Option<String>,
    quiet_targets: Vec<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            console: true,
            stderr: false,
            path: None,
            level: LevelFilter::INFO,
            rotation: Rotation::DAILY,
            max_files: DEFAULT_MAX_FILES,
            json: false,
            env_filter: None,
            quiet_targets: QUIET_TARGETS.iter().map(|&target| target.to_owned()).collect(),
        }
    }
}

#[derive(Debug)]
pub struct NoName;
#[derive(Debug)]
pub struct WithName(String);
#[derive(Debug)]
pub struct NoFile;
#[derive(Debug)]
pub struct WithFile;

mod private {
    pub trait Sealed {}
}
impl Sealed for NoName {}
impl Sealed for WithName {}
impl Sealed for NoFile {}
impl Sealed for WithFile {}

/// A builder for configuring and initializing the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder<N: Sealed = NoName, F: Sealed = NoFile> {
    config: LoggerConfig,
    name: N,
    file_state: std::marker::PhantomData<F>,
}

impl<F: Sealed> LoggerBuilder<NoName, F> {
    /// Sets the name of the logger.
    pub fn name(self, name: impl Into<String>) -> LoggerBuilder<WithName, F> {
        LoggerBuilder {
            name: WithName(name.into()),
            config: self.config,
            file_state: std::marker::PhantomData,
        }
    }
}

impl LoggerBuilder<WithName, WithFile> {
    /// Configures maximum number of log files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn max_files(mut self, max: usize) -> Self {
        self.config.max_files = max;
        self
    }

    /// Configures the log file rotation strategy.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn rotation(mut self, rotation: Rotation) -> Self {
        self.config.rotation = rotation;
        self
    }

    /// Writes the file output as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn json(mut self) -> Self {
        self.config.json = true;
        self
    }
}

impl<F: Sealed> LoggerBuilder<WithName, F> {
    /// Configures the minimum log level. `LOG_LEVEL` takes precedence when set.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.config.level = level;
        self
    }

    /// Adds explicit filter directives (e.g., `stencil_catalog=debug,hyper=info`).
    ///
    /// Replaces `RUST_LOG` as the directive source.
    /// Invalid filters will cause [`LoggerBuilder::init`] to return an error.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.config.env_filter = Some(filter.into());
        self
    }

    /// Sets the targets capped at `WARN` while the level is less verbose than `DEBUG`.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn quiet_targets<I, S>(mut self, targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.quiet_targets = targets.into_iter().map(Into::into).collect();
        self
    }

    /// Enables console logging.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.config.console = enabled;
        self
    }

    /// Sends console output to stderr instead of stdout.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn stderr(mut self, enabled: bool) -> Self {
        self.config.stderr = enabled;
        self
    }

    /// Sets the directory for rolling log files.
    pub fn path(self, path: impl Into<PathBuf>) -> LoggerBuilder<WithName, WithFile> {
        let mut config = self.config;
        config.path = Some(path.into());
        LoggerBuilder { config, name: self.name, file_state: std::marker::PhantomData }
    }

    /// Consumes the builder and initializes the global tracing subscriber.
    ///
    /// # Returns
    /// A [`Logger`] handle. It owns the file writer's [`WorkerGuard`] and must be
    /// kept alive for the duration of the program so buffered lines are flushed.
    ///
    /// # Errors
    /// Returns [`LoggerError::Subscriber`] if a global subscriber has already been set.
    /// Returns [`LoggerError::InvalidConfiguration`] for invalid builder settings.
    pub fn init(self) -> Result<Logger, LoggerError> {
        validate_config(&self.config, &self.name.0)?;

        let level = resolve_level(self.config.level, std::env::var(LOG_LEVEL_ENV).ok().as_deref());
        let env_filter = build_env_filter(&self.config, level)?;
        let quiet = quiet_directives(&self.config.quiet_targets)?;
        let (filter_layer, filter) = reload::Layer::new(env_filter);

        let mut layers = Vec::new();

        if self.config.console {
            let console = layer().compact().with_ansi(true);
            layers.push(if self.config.stderr {
                console.with_writer(std::io::stderr).boxed()
            } else {
                console.boxed()
            });
        }

        let guard = if let Some(path) = self.config.path {
            fs::create_dir_all(&path).map_err(|e| LoggerError::Internal {
                message: e.to_string().into(),
                context: Some(format!("Failed to create path: {}", path.display()).into()),
            })?;

            let file_appender = RollingFileAppender::builder()
                .rotation(self.config.rotation)
                .filename_prefix(&self.name.0)
                .filename_suffix(LOG_FILE_SUFFIX)
                .max_log_files(self.config.max_files)
                .build(path)?;

            let (non_blocking, g) = tracing_appender::non_blocking(file_appender);

            let file_layer = layer().with_writer(non_blocking).with_ansi(false);

            let boxed =
                if self.config.json { file_layer.json().boxed() } else { file_layer.boxed() };

            layers.push(boxed);
            Some(g)
        } else {
            None
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging layers enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter_layer).with(layers).try_init()?;

        tracing::debug!(name = %self.name.0, %level, "Logging initialized");

        Ok(Logger { guard, filter, level, quiet })
    }
}

/// A handle to the initialized logging system.
///
/// Holds the background worker guard and the filter reload handle. Drop it
/// only when the application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
pub struct Logger {
    guard: Option<WorkerGuard>,
    filter: FilterHandle,
    level: LevelFilter,
    quiet: Vec<Directive>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing subscriber.
    ///
    /// The `name` is used as the prefix of rolling log files
    /// (e.g., `my-app.2026-10-16.log`).
    ///
    /// # Example
    ///
    /// ```rust
    /// use stencil_logger::{LevelFilter, Logger};
    ///
    /// let _logger = Logger::builder()
    ///     .name("my-app")
    ///     .level(LevelFilter::DEBUG)
    ///     .init()
    ///     .unwrap();
    /// ```
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder {
            config: LoggerConfig::default(),
            name: NoName,
            file_state: std::marker::PhantomData,
        }
    }

    /// Changes the global level at runtime, replacing every active directive.
    ///
    /// Quiet targets are capped again when `level` is less verbose than `DEBUG`.
    ///
    /// # Errors
    /// Returns [`LoggerError::Reload`] if the subscriber has been dropped.
    pub fn set_level(&mut self, level: LevelFilter) -> Result<(), LoggerError> {
        let filter = cap_quiet_targets(
            EnvFilter::default().add_directive(level.into()),
            level,
            &self.quiet,
        );
        self.filter.reload(filter)?;
        self.level = level;
        tracing::debug!(%level, "Log level changed");
        Ok(())
    }

    /// Replaces the active filter with `directives`, e.g. `stencil_kernel=trace`.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for unparsable directives and
    /// [`LoggerError::Reload`] if the subscriber has been dropped.
    pub fn set_directives(&self, directives: &str) -> Result<(), LoggerError> {
        let filter = EnvFilter::builder()
            .with_default_directive(self.level.into())
            .parse(directives)
            .map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{directives}': {e}").into(),
                context: None,
            })?;
        self.filter.reload(filter).context("Replacing filter directives")
    }

    /// The level the filter was last set to.
    #[must_use]
    pub const fn level(&self) -> LevelFilter {
        self.level
    }

    /// Best-effort synchronization point before shutdown.
    ///
    /// Buffered file output is flushed for real when this handle is dropped.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level)
            .field("file_output", &self.guard.is_some())
            .finish_non_exhaustive()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}

/// Parses a level name the way operators tend to write it.
///
/// Accepts the `tracing` names plus `WARNING` and `CRITICAL`, case-insensitively.
#[must_use]
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    match raw.trim().to_ascii_uppercase().as_str() {
        "TRACE" => Some(LevelFilter::TRACE),
        "DEBUG" => Some(LevelFilter::DEBUG),
        "INFO" => Some(LevelFilter::INFO),
        "WARN" | "WARNING" => Some(LevelFilter::WARN),
        "ERROR" | "CRITICAL" => Some(LevelFilter::ERROR),
        "OFF" => Some(LevelFilter::OFF),
        _ => None,
    }
}

/// Picks the environment override when it names a known level.
fn resolve_level(configured: LevelFilter, env_value: Option<&str>) -> LevelFilter {
    env_value.and_then(parse_level).unwrap_or(configured)
}

fn validate_config(config: &LoggerConfig, name: &str) -> Result<(), LoggerError> {
    if name.trim().is_empty() {
        return Err(LoggerError::InvalidConfiguration {
            message: "Logger name cannot be empty".into(),
            context: None,
        });
    }

    if config.max_files == 0 {
        return Err(LoggerError::InvalidConfiguration {
            message: "max_files must be greater than zero".into(),
            context: None,
        });
    }

    Ok(())
}

fn build_env_filter(config: &LoggerConfig, level: LevelFilter) -> Result<EnvFilter, LoggerError> {
    let builder = EnvFilter::builder().with_default_directive(level.into());
    let filter = config.env_filter.as_ref().map_or_else(
        || Ok(builder.from_env_lossy()),
        |filter| {
            builder.parse(filter).map_err(|e| LoggerError::InvalidConfiguration {
                message: format!("Invalid env filter '{filter}': {e}").into(),
                context: None,
            })
        },
    )?;

    Ok(cap_quiet_targets(filter, level, &quiet_directives(&config.quiet_targets)?))
}

fn cap_quiet_targets(mut filter: EnvFilter, level: LevelFilter, quiet: &[Directive]) -> EnvFilter {
    if level < LevelFilter::DEBUG {
        for directive in quiet {
            filter = filter.add_directive(directive.clone());
        }
    }
    filter
}

fn quiet_directives(targets: &[String]) -> Result<Vec<Directive>, LoggerError> {
    targets
        .iter()
        .map(|target| {
            format!("{target}=warn").parse::<Directive>().map_err(|e| {
                LoggerError::InvalidConfiguration { message: e.to_string().into(), context: None }
            })
        })
        .collect()
}
