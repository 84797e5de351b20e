//! Fallback location of the configuration directory.
//!
//! Used only when neither an argument nor `GC_PATH` names a directory.

use std::path::PathBuf;

use super::env::env_var_or_none;
use crate::constants::{CONFIG_SUBDIR, HOME_ENV_VAR};
use crate::error::ConfigError;

/// Returns `<base>/config`, where `<base>` is `GC_HOME` if set, otherwise the
/// current working directory.
pub fn default_config_dir() -> Result<PathBuf, ConfigError> {
    let base = match env_var_or_none(HOME_ENV_VAR) {
        Some(home) => PathBuf::from(home),
        None => std::env::current_dir().map_err(|e| {
            ConfigError::PathResolution(format!(
                "{HOME_ENV_VAR} is not set and the working directory is unavailable: {e}"
            ))
        })?,
    };

    Ok(base.join(CONFIG_SUBDIR))
}
