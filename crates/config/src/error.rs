//! Error types for configuration loading and strict lookups.
//!
//! Responsibilities:
//! - Define error variants for every fatal loading failure.
//! - Define the errors returned by strict typed lookups.
//!
//! Does NOT handle:
//! - Malformed lines in permissive mode (silently skipped by the parser).
//! - Lenient typed lookups (they degrade to zero values instead of failing).
//!
//! Invariants:
//! - All error variants include context for debugging (paths, keys, line numbers).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or strictly querying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config directory at {path}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config file not found in path {path}: at least one configuration file is required")]
    NoConfigFile { path: PathBuf },

    #[error("Error opening config file {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unable to determine config directory path: {0}")]
    PathResolution(String),

    #[error("Malformed property at {path}:{line}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        message: String,
    },

    #[error("Missing configuration key: {0}")]
    MissingKey(String),

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid argument {flag}: {message}")]
    InvalidArgument { flag: String, message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// Whether the error means a key was looked up but not found.
    pub fn is_missing_key(&self) -> bool {
        matches!(self, ConfigError::MissingKey(_))
    }
}
