//! Environment variable handling for the loader.
//!
//! Responsibilities:
//! - Read `GC_PROFILE` and `GC_PATH` and apply them to a ConfigLoader.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Invariants:
//! - Values already set from arguments or builder methods are never overwritten.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::path::PathBuf;

use super::builder::ConfigLoader;
use crate::constants::{PATH_ENV_VAR, PROFILE_ENV_VAR};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Fill in profile and path from the environment where not already set.
pub fn apply_env(loader: &mut ConfigLoader) {
    if loader.profile().is_none()
        && let Some(profile) = env_var_or_none(PROFILE_ENV_VAR)
    {
        tracing::debug!(profile = %profile, "Profile selected from {}", PROFILE_ENV_VAR);
        loader.set_profile(Some(profile));
    }
    if loader.path().is_none()
        && let Some(path) = env_var_or_none(PATH_ENV_VAR)
    {
        tracing::debug!(path = %path, "Config path selected from {}", PATH_ENV_VAR);
        loader.set_path(Some(PathBuf::from(path)));
    }
}
