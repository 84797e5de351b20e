//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read `GC_PROFILE` / `GC_PATH` as clap env defaults.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not rewrite legacy `-profile=` flags (done in `main` before parsing).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "gconfig")]
#[command(about = "Inspect profile-aware .properties configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  gconfig --path ./config list\n  gconfig --profile dev get app.name\n  gconfig -profile=dev -path=./config get server.port --kind int\n  gconfig exists feature.enabled\n"
)]
pub struct Cli {
    /// Active profile; selects application-<profile>.properties
    #[arg(long, global = true, env = "GC_PROFILE")]
    pub profile: Option<String>,

    /// Directory containing the property files
    #[arg(long, global = true, env = "GC_PATH", value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Fail on malformed lines instead of skipping them
    #[arg(long, global = true)]
    pub strict: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the resolved value of a key
    Get {
        /// Property key (e.g., app.name)
        key: String,

        /// How to interpret the value
        #[arg(short, long, value_enum, default_value_t = ValueKind::String)]
        kind: ValueKind,
    },

    /// Report whether a key resolves to a value (exit code 4 if not)
    Exists {
        /// Property key (e.g., app.name)
        key: String,
    },

    /// Print every resolved key and raw value
    List,

    /// Show the active profile and which files were loaded
    Profile,
}

/// Lookup flavor used by `get`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ValueKind {
    /// String with `${NAME}` / `${NAME:default}` expansion
    String,
    /// Integer, 0 if invalid
    Int,
    /// Float, 0.0 if invalid
    Float,
    /// Boolean, false if invalid
    Bool,
    /// Same as `string`
    Default,
    /// Comma-separated list with per-element expansion
    List,
}
