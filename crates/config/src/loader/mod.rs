//! Configuration loader for property file directories.
//!
//! Responsibilities:
//! - Resolve the active profile and the configuration directory.
//! - Discover, classify and parse the default and profile property files.
//! - Provide a builder-pattern `ConfigLoader` producing a `ConfigStore`.
//!
//! Does NOT handle:
//! - Key lookups and placeholder expansion (see `store.rs`).
//! - Publishing a process-wide store (see `global.rs`).
//!
//! Invariants / Assumptions:
//! - Command-line arguments and builder values take precedence over environment variables.
//! - Environment variables take precedence over the built-in fallbacks.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - A failed load never yields a partially populated store.

mod args;
mod builder;
mod discovery;
mod env;
mod path;

pub use args::{LoadArgs, normalize_legacy_flags};
pub use builder::ConfigLoader;
pub use discovery::{LoadedLayers, load_layers};
pub use env::env_var_or_none;
pub use path::default_config_dir;

#[cfg(test)]
mod tests;
