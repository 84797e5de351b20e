//! Process-wide handle to a loaded store.
//!
//! The handle can be set once. Passing a `ConfigStore` explicitly is preferred;
//! this exists for call sites that cannot have it threaded through.

use std::sync::OnceLock;

use crate::error::ConfigError;
use crate::store::ConfigStore;

static STORE: OnceLock<ConfigStore> = OnceLock::new();

/// Publish `store` as the process-wide configuration.
///
/// Returns the store back if one was already installed.
pub fn install(store: ConfigStore) -> Result<(), ConfigStore> {
    STORE.set(store)
}

/// The installed store, if any.
pub fn get() -> Option<&'static ConfigStore> {
    STORE.get()
}

/// Load with [`crate::load`] and install the result, unless a store is already installed.
///
/// If another thread installs first, its store is returned and this one is dropped.
pub fn load() -> Result<&'static ConfigStore, ConfigError> {
    if let Some(store) = get() {
        return Ok(store);
    }
    let store = crate::load()?;
    Ok(STORE.get_or_init(|| store))
}
