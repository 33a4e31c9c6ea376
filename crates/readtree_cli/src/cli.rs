//! CLI argument parsing using `clap`.

use clap::{Parser, Subcommand, ValueEnum};
use readtree_core::{default_log_level, DEFAULT_DATA_FILE_NAME};
use std::path::PathBuf;

/// Command-line arguments for `readtree`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "readtree",
    version,
    about = "Keep a tree of readings and what to read before each one.",
    long_about = None
)]
pub struct CliArgs {
    /// Snapshot file (JSON). Created on first add.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_FILE_NAME)]
    pub data: PathBuf,

    /// Directory for rolling log files. Logging is off when omitted.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Logging level; defaults to `debug` in debug builds, `info` otherwise.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl CliArgs {
    pub fn log_level(&self) -> &'static str {
        match self.log_level {
            Some(LogLevel::Error) => "error",
            Some(LogLevel::Warn) => "warn",
            Some(LogLevel::Info) => "info",
            Some(LogLevel::Debug) => "debug",
            Some(LogLevel::Trace) => "trace",
            None => default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Add a work and save the snapshot.
    Add {
        title: String,
        #[arg(long)]
        author: Option<String>,
        #[arg(long, value_name = "URL")]
        image_url: Option<String>,
        /// Title to read before this one. Repeatable.
        #[arg(long, value_name = "TITLE")]
        before: Vec<String>,
    },
    /// List works with their prerequisites.
    List,
    /// Print derived nodes and edges.
    Graph,
    /// Print top-down layers; cycle members share a layer.
    Layers,
    /// Print the renderer hand-off as JSON.
    Canvas,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
