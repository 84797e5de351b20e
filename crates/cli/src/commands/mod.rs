//! Command implementations.
//!
//! Each command takes the loaded store and returns the text to print plus the
//! exit code; `main` owns stdout and process exit.

mod get;
mod list;
mod profile;

use gconfig::ConfigStore;

use crate::args::Commands;
use crate::error::ExitCode;
use crate::output::OutputFormat;

/// What a command wants printed and how the process should exit.
#[derive(Debug)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: ExitCode,
}

impl CommandOutput {
    fn success(text: String) -> Self {
        Self {
            text,
            exit_code: ExitCode::Success,
        }
    }
}

pub fn run_command(
    command: &Commands,
    store: &ConfigStore,
    format: OutputFormat,
) -> anyhow::Result<CommandOutput> {
    match command {
        Commands::Get { key, kind } => get::run_get(store, key, *kind, format),
        Commands::Exists { key } => get::run_exists(store, key, format),
        Commands::List => list::run_list(store, format),
        Commands::Profile => profile::run_profile(store, format),
    }
}
