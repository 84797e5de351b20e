//! Profile-aware configuration loading from `.properties` files.
//!
//! A configuration directory holds a default layer (`application.properties`)
//! and optional profile layers (`application-<profile>.properties`). Loading
//! picks the default layer plus the active profile's layer; lookups prefer the
//! profile layer and fall back to the default.
//!
//! ```no_run
//! let store = gconfig::ConfigLoader::new()
//!     .with_profile("dev")
//!     .with_path("config")
//!     .load()?;
//!
//! let name = store.get_string("app.name");
//! let port = store.get_int("server.port");
//! # Ok::<(), gconfig::ConfigError>(())
//! ```

pub mod constants;
mod error;
pub mod expand;
pub mod global;
mod layer;
mod loader;
pub mod parser;
mod store;

pub use error::ConfigError;
pub use expand::{EnvSource, ProcessEnv};
pub use layer::PropertyLayer;
pub use loader::{
    ConfigLoader, LoadArgs, LoadedLayers, default_config_dir, env_var_or_none, load_layers,
    normalize_legacy_flags,
};
pub use parser::{ParseMode, PropertyFileParser};
pub use store::{ConfigStore, parse_bool};

/// Load using process arguments, then `GC_PROFILE`/`GC_PATH`, then fallbacks.
///
/// Equivalent to
/// `ConfigLoader::new().with_args(std::env::args_os().skip(1))?.from_env().load()`.
pub fn load() -> Result<ConfigStore, ConfigError> {
    ConfigLoader::new()
        .with_args(std::env::args_os().skip(1))?
        .from_env()
        .load()
}

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
