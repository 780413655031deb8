//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "stencil")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Load, validate and reshape JSON records")]
pub(crate) struct Cli {
    /// Settings file (TOML, JSON or YAML); `STENCIL__*` variables override it
    #[arg(short, long, global = true)]
    pub(crate) config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides the settings file
    #[arg(short, long, global = true)]
    pub(crate) log_level: Option<String>,

    #[command(subcommand)]
    pub(crate) command: Command,
}

/// Enumeration of available subcommands.
#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Insert the `items` array of a JSON file into a catalog and print it
    Ingest {
        /// JSON file with a top-level `items` array
        file: PathBuf,
        /// Only print records where KEY equals VALUE (VALUE is parsed as JSON, else text)
        #[arg(short, long, value_name = "KEY=VALUE")]
        filter: Option<String>,
    },
    /// Flatten a nested JSON object into path-joined keys
    Flatten {
        file: PathBuf,
        #[arg(short, long, default_value = ".")]
        separator: String,
        #[arg(short, long, default_value = "")]
        prefix: String,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Split the `items` array of a JSON file into fixed-size chunks
    Chunk {
        file: PathBuf,
        #[arg(short, long)]
        size: usize,
    },
}
