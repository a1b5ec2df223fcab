// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `templerun`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "templerun",
    version,
    about = "Run a batch of template/text invocations against an external text-processing tool.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Templerun.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Templerun.toml")]
    pub config: String,

    /// Path to the templates source (JSON array of string triples).
    ///
    /// Overrides `[inputs].templates` from the config file.
    #[arg(long, value_name = "PATH")]
    pub templates: Option<String>,

    /// Path to the texts source (JSON array of strings).
    ///
    /// Overrides `[inputs].texts` from the config file.
    #[arg(long, value_name = "PATH")]
    pub texts: Option<String>,

    /// Exit non-zero if any invocation fails.
    ///
    /// The whole batch still runs to completion first; this only changes the
    /// final exit status, not the continue-on-failure execution order.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `TEMPLERUN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Load inputs, print every invocation line, but don't execute anything.
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
