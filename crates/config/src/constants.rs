//! Centralized constants for property file discovery and loading.
//!
//! File naming conventions, environment variable names and fallbacks live here
//! so the loader, the store and the CLI agree on them.

// =============================================================================
// File Naming
// =============================================================================

/// Extension every candidate configuration file must carry.
pub const PROP_EXTENSION: &str = "properties";

/// Standard filename of the default layer.
pub const STANDARD_PROP_FILENAME: &str = "application.properties";

/// Alternate filename that is also treated as the default layer.
pub const DEFAULT_PROP_FILENAME: &str = "application-default.properties";

/// Prefix of profile layer filenames (`application-<profile>.properties`).
pub const PROFILE_PROP_PREFIX: &str = "application-";

// =============================================================================
// Environment Variables
// =============================================================================

/// Selects the active profile when no command-line flag is given.
pub const PROFILE_ENV_VAR: &str = "GC_PROFILE";

/// Overrides the configuration directory when no command-line flag is given.
pub const PATH_ENV_VAR: &str = "GC_PATH";

/// Base directory used to derive the fallback configuration directory.
pub const HOME_ENV_VAR: &str = "GC_HOME";

/// Disables `.env` preloading when set to `1` or `true`.
pub const DOTENV_DISABLED_ENV_VAR: &str = "DOTENV_DISABLED";

// =============================================================================
// Fallbacks
// =============================================================================

/// Profile used when neither a flag nor `GC_PROFILE` selects one.
pub const DEFAULT_PROFILE: &str = "local";

/// Subdirectory of the base directory that holds the property files.
pub const CONFIG_SUBDIR: &str = "config";

/// Returns the profile layer filename for `profile`.
pub fn profile_filename(profile: &str) -> String {
    format!("{PROFILE_PROP_PREFIX}{profile}.{PROP_EXTENSION}")
}

/// Whether `name` is one of the recognized default layer filenames.
pub fn is_default_filename(name: &str) -> bool {
    name == STANDARD_PROP_FILENAME || name == DEFAULT_PROP_FILENAME
}
