#![allow(clippy::print_stdout)]

mod args;
mod handlers;

use crate::args::{Cli, Command};
use anyhow::{Context, Result};
use clap::Parser;
use serde_json::Value;
use stencil::domain::config::{AppConfig, LoggingSettings};
use stencil::kernel::config::load_config;
use stencil::logger::{LevelFilter, Logger, LoggerError, parse_level};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config: AppConfig = match &cli.config {
        Some(path) => load_config(Some(path))?,
        None => AppConfig::default(),
    };

    let raw_level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let level = parse_level(raw_level)
        .with_context(|| format!("Unknown log level `{raw_level}`"))?;
    let _logger = init_logging(&config.logging, level)?;

    match cli.command {
        Command::Ingest { file, filter } => {
            print_json(&handlers::ingest(&config.catalog, &file, filter.as_deref())?)?;
        }
        Command::Flatten { file, separator, prefix, out } => {
            if let Some(flat) = handlers::flatten_file(&file, &separator, &prefix, out.as_deref())? {
                print_json(&flat)?;
            }
        }
        Command::Chunk { file, size } => print_json(&handlers::chunk_file(&file, size)?)?,
    }

    Ok(())
}

fn init_logging(settings: &LoggingSettings, level: LevelFilter) -> Result<Logger, LoggerError> {
    let builder = Logger::builder().name(env!("CARGO_PKG_NAME")).stderr(true).level(level);

    match &settings.directory {
        Some(dir) if settings.json => builder.path(dir).json().init(),
        Some(dir) => builder.path(dir).init(),
        None => builder.init(),
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
