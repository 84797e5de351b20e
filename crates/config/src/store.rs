//! The loaded configuration and its lookups.
//!
//! Responsibilities:
//! - Hold the default and profile layers for one active profile.
//! - Resolve keys by layer precedence.
//! - Provide typed lookups (lenient and strict) and placeholder expansion.
//!
//! Does NOT handle:
//! - Discovering or reading files (see `loader`).
//! - Publishing a process-wide instance (see `global`).
//!
//! Invariants:
//! - The store never changes after construction; concurrent reads are safe.
//! - The active profile is always lower-cased.
//! - Lenient typed lookups never fail; they return the type's zero value.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ConfigError;
use crate::expand::{EnvSource, ProcessEnv, expand_list, expand_with_default};
use crate::layer::PropertyLayer;

/// Two-layer configuration for a single active profile.
#[derive(Clone)]
pub struct ConfigStore {
    profile: String,
    default_layer: Option<PropertyLayer>,
    profile_layer: Option<PropertyLayer>,
    env: Arc<dyn EnvSource>,
}

impl fmt::Debug for ConfigStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigStore")
            .field("profile", &self.profile)
            .field("default_layer", &self.default_layer)
            .field("profile_layer", &self.profile_layer)
            .finish_non_exhaustive()
    }
}

impl ConfigStore {
    /// Create a store from already parsed layers.
    ///
    /// Placeholders are expanded against the process environment unless
    /// [`ConfigStore::with_env_source`] replaces it.
    pub fn new(
        profile: &str,
        default_layer: Option<PropertyLayer>,
        profile_layer: Option<PropertyLayer>,
    ) -> Self {
        Self {
            profile: profile.to_lowercase(),
            default_layer,
            profile_layer,
            env: Arc::new(ProcessEnv),
        }
    }

    /// Expand placeholders against `env` instead of the process environment.
    pub fn with_env_source(mut self, env: Arc<dyn EnvSource>) -> Self {
        self.env = env;
        self
    }

    /// The active (lower-cased) profile.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    pub fn default_layer(&self) -> Option<&PropertyLayer> {
        self.default_layer.as_ref()
    }

    pub fn profile_layer(&self) -> Option<&PropertyLayer> {
        self.profile_layer.as_ref()
    }

    /// True when neither layer holds any entry.
    pub fn is_empty(&self) -> bool {
        self.default_layer.as_ref().is_none_or(PropertyLayer::is_empty)
            && self.profile_layer.as_ref().is_none_or(PropertyLayer::is_empty)
    }

    /// Number of distinct keys visible through [`ConfigStore::get_value`].
    pub fn len(&self) -> usize {
        self.effective_entries().len()
    }

    /// The profile layer, if it belongs to the active profile.
    fn active_profile_layer(&self) -> Option<&PropertyLayer> {
        self.profile_layer
            .as_ref()
            .filter(|layer| layer.source_name().contains(self.profile.as_str()))
    }

    /// Resolve the raw value of `key`.
    ///
    /// The active profile layer wins; the default layer fills in keys the
    /// profile layer does not define.
    pub fn get_value(&self, key: &str) -> Option<&str> {
        self.active_profile_layer()
            .and_then(|layer| layer.get(key))
            .or_else(|| self.default_layer.as_ref().and_then(|layer| layer.get(key)))
    }

    /// Whether `key` resolves to a value, even an empty one.
    pub fn exists(&self, key: &str) -> bool {
        self.get_value(key).is_some()
    }

    /// The resolved value with a whole-value `${NAME}` or `${NAME:default}` expanded.
    ///
    /// An absent key yields `""`; use [`ConfigStore::exists`] to tell the two apart.
    pub fn get_string(&self, key: &str) -> String {
        self.get_value(key)
            .map(|value| expand_with_default(value, self.env.as_ref()).into_owned())
            .unwrap_or_default()
    }

    /// Same expansion as [`ConfigStore::get_string`]: `NAME` when set and
    /// non-empty, otherwise `default`.
    pub fn get_string_or_default(&self, key: &str) -> String {
        self.get_string(key)
    }

    /// Comma-separated list where each element is expanded independently.
    pub fn get_string_or_default_in_comma_separator(&self, key: &str) -> String {
        self.get_value(key)
            .map(|value| expand_list(value, self.env.as_ref()))
            .unwrap_or_default()
    }

    /// Integer value, or `0` when absent or unparseable.
    pub fn get_int(&self, key: &str) -> i64 {
        self.lenient(key, "integer")
    }

    /// Float value, or `0.0` when absent or unparseable.
    pub fn get_float(&self, key: &str) -> f64 {
        self.lenient(key, "float")
    }

    /// Boolean value, or `false` when absent or unparseable.
    pub fn get_bool(&self, key: &str) -> bool {
        self.try_get_bool(key).unwrap_or_else(|e| {
            if !e.is_missing_key() {
                tracing::debug!(key, error = %e, "Using false for invalid boolean");
            }
            false
        })
    }

    /// Strict lookup parsed with [`FromStr`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingKey`] if the key does not resolve.
    /// - [`ConfigError::InvalidValue`] if the raw value does not parse.
    pub fn try_get<T>(&self, key: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let raw = self
            .get_value(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        raw.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.to_string(),
            message: e.to_string(),
        })
    }

    /// Strict boolean lookup using the same spellings as [`parse_bool`].
    pub fn try_get_bool(&self, key: &str) -> Result<bool, ConfigError> {
        let raw = self
            .get_value(key)
            .ok_or_else(|| ConfigError::MissingKey(key.to_string()))?;
        parse_bool(raw).ok_or_else(|| ConfigError::InvalidValue {
            key: key.to_string(),
            message: format!("'{raw}' is not a boolean"),
        })
    }

    /// Every resolved key and raw value, sorted by key.
    pub fn effective_entries(&self) -> BTreeMap<&str, &str> {
        let mut entries: BTreeMap<&str, &str> = self
            .default_layer
            .iter()
            .flat_map(PropertyLayer::iter)
            .collect();
        if let Some(layer) = self.active_profile_layer() {
            entries.extend(layer.iter());
        }
        entries
    }

    fn lenient<T>(&self, key: &str, kind: &str) -> T
    where
        T: FromStr + Default,
        T::Err: fmt::Display,
    {
        self.try_get(key).unwrap_or_else(|e| {
            if !e.is_missing_key() {
                tracing::debug!(key, error = %e, "Using zero value for invalid {kind}");
            }
            T::default()
        })
    }
}

/// Parse the boolean spellings `1 t T TRUE true True` and `0 f F FALSE false False`.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
