// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `globwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "globwatch",
    version,
    about = "Watch paths and glob patterns and print file change events.",
    long_about = None
)]
pub struct CliArgs {
    /// Paths or glob patterns to watch. Prefix a glob with `!` to exclude.
    ///
    /// Appended to `[watch].targets` from the config file.
    #[arg(value_name = "TARGET")]
    pub targets: Vec<String>,

    /// Path to the config file (TOML).
    ///
    /// Default: `Globwatch.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Directory relative targets and patterns are resolved against.
    #[arg(long, value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Ignore a path or glob pattern (repeatable).
    #[arg(long = "ignore", value_name = "PATTERN")]
    pub ignore: Vec<String>,

    /// Do not report entries found by the initial scan.
    #[arg(long)]
    pub ignore_initial: bool,

    /// Maximum directory depth below each watched root.
    #[arg(long, value_name = "N")]
    pub depth: Option<usize>,

    /// Poll the filesystem instead of using native notifications.
    #[arg(long)]
    pub poll: bool,

    /// Polling interval in milliseconds.
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub interval_ms: Option<u64>,

    /// Treat every target as a literal path.
    #[arg(long)]
    pub disable_globbing: bool,

    /// Also print events suppressed by the glob filter (as `original:<kind>`).
    #[arg(long)]
    pub show_suppressed: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `GLOBWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the watch roots and filters, but don't start watching.
    #[arg(long)]
    pub dry_run: bool,
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

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
