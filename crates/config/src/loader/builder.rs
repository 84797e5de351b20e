//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` collecting profile, path and parse mode.
//! - Load the property files and produce an immutable `ConfigStore`.
//! - Optionally preload a `.env` file so placeholders can read it.
//!
//! Does NOT handle:
//! - Environment variable lookup details (delegated to env.rs).
//! - Argument scanning details (delegated to args.rs).
//! - Directory scanning and classification (delegated to discovery.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods and arguments take precedence over environment variables.
//! - `from_env()` only fills values that are still unset.
//! - The profile defaults to `local` and is always lower-cased.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::Arc;

use super::args::LoadArgs;
use super::discovery::load_layers;
use super::env::apply_env;
use super::path::default_config_dir;
use crate::constants::{DEFAULT_PROFILE, DOTENV_DISABLED_ENV_VAR};
use crate::error::ConfigError;
use crate::expand::EnvSource;
use crate::parser::{ParseMode, PropertyFileParser};
use crate::store::ConfigStore;

/// Configuration loader that builds a store from a directory of property files.
#[derive(Default)]
pub struct ConfigLoader {
    profile: Option<String>,
    path: Option<PathBuf>,
    mode: ParseMode,
    env: Option<Arc<dyn EnvSource>>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED_ENV_VAR).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Set the active profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Set the configuration directory.
    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Apply `-profile` / `-path` flags found in `args`.
    ///
    /// Flags override anything set earlier; absent flags leave values untouched.
    pub fn with_args<I, S>(mut self, args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        let LoadArgs { profile, path } = LoadArgs::scan(args)?;
        if profile.is_some() {
            self.profile = profile;
        }
        if path.is_some() {
            self.path = path;
        }
        Ok(self)
    }

    /// Read `GC_PROFILE` and `GC_PATH` for values not set yet.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Fail the load on malformed lines instead of skipping them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.mode = if strict {
            ParseMode::Strict
        } else {
            ParseMode::Permissive
        };
        self
    }

    /// Expand placeholders in the loaded store against `env`.
    pub fn with_env_source(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = Some(env);
        self
    }

    /// The profile that `load()` will use.
    pub fn resolved_profile(&self) -> String {
        self.profile
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PROFILE)
            .to_lowercase()
    }

    /// The directory that `load()` will scan.
    pub fn resolved_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => {
                let path = default_config_dir()?;
                tracing::debug!(path = %path.display(), "No config path given, using fallback");
                Ok(path)
            }
        }
    }

    /// Discover and parse the property files.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::PathResolution`] if no directory is given and none can be derived.
    /// - [`ConfigError::DirectoryRead`] if the directory cannot be listed.
    /// - [`ConfigError::NoConfigFile`] if the directory is empty.
    /// - [`ConfigError::FileRead`] if a matching file cannot be read.
    /// - [`ConfigError::Parse`] in strict mode, for the first malformed line.
    pub fn load(self) -> Result<ConfigStore, ConfigError> {
        let profile = self.resolved_profile();
        let path = self.resolved_path()?;
        let parser = PropertyFileParser::with_mode(self.mode);
        tracing::debug!(
            path = %path.display(),
            profile = %profile,
            mode = ?parser.mode(),
            "Loading configuration"
        );

        let layers = load_layers(&path, &profile, &parser)?;

        let mut store = ConfigStore::new(&profile, layers.default_layer, layers.profile_layer);
        if let Some(env) = self.env {
            store = store.with_env_source(env);
        }

        if store.is_empty() {
            tracing::warn!(profile = %profile, "Configuration loaded, but empty");
        } else {
            tracing::info!(
                profile = %profile,
                keys = store.len(),
                default_layer = store.default_layer().is_some(),
                profile_layer = store.profile_layer().is_some(),
                "Configuration loaded"
            );
        }

        Ok(store)
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn profile(&self) -> Option<&String> {
        self.profile.as_ref()
    }

    pub(crate) fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }

    pub(crate) fn set_profile(&mut self, profile: Option<String>) {
        self.profile = profile;
    }

    pub(crate) fn set_path(&mut self, path: Option<PathBuf>) {
        self.path = path;
    }
}
