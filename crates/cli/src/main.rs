//! gconfig - command-line front end for profile-aware property configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the configuration directory through `gconfig::ConfigLoader`.
//! - Print lookup results as text or JSON.
//!
//! Does NOT handle:
//! - Parsing or resolution rules (see `crates/config`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Legacy single-dash `-profile=`/`-path=` flags are rewritten before clap sees them.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod error;
mod output;

use anyhow::Context;
use args::Cli;
use clap::Parser;
use commands::{CommandOutput, run_command};
use error::{ExitCode, ExitCodeExt};
use gconfig::{ConfigLoader, ConfigStore, normalize_legacy_flags};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse_from(normalize_legacy_flags(std::env::args_os()));

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run(&cli) {
        Ok(CommandOutput { text, exit_code }) => {
            if !text.is_empty() {
                println!("{}", text);
            }
            exit_code
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: &Cli) -> anyhow::Result<CommandOutput> {
    let store = load_store(cli)?;
    run_command(&cli.command, &store, cli.output)
}

fn load_store(cli: &Cli) -> anyhow::Result<ConfigStore> {
    let mut loader = ConfigLoader::new().strict(cli.strict);

    // Blank/whitespace-only values are ignored to allow the loader fallbacks
    if let Some(profile) = cli.profile.as_deref().filter(|p| !p.trim().is_empty()) {
        loader = loader.with_profile(profile);
    }
    if let Some(path) = cli
        .path
        .as_ref()
        .filter(|p| !p.to_string_lossy().trim().is_empty())
    {
        loader = loader.with_path(path.clone());
    }

    loader
        .from_env()
        .load()
        .context("Failed to load configuration")
}
