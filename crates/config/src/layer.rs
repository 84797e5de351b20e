//! A single parsed property file.

use std::collections::HashMap;

/// One parsed property file's key/value set.
///
/// Keys and values are stored trimmed. A layer is only filled in while its
/// file is parsed and never changes afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyLayer {
    source_name: String,
    entries: HashMap<String, String>,
}

impl PropertyLayer {
    /// Create an empty layer for the given origin.
    pub fn new(source_name: impl Into<String>) -> Self {
        Self {
            source_name: source_name.into(),
            entries: HashMap::new(),
        }
    }

    /// Build a layer from already split pairs, trimming them like the parser does.
    pub fn from_entries<I, K, V>(source_name: impl Into<String>, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut layer = Self::new(source_name);
        for (key, value) in entries {
            layer.insert(key.as_ref(), value.as_ref());
        }
        layer
    }

    /// Filename (or other origin label) this layer was parsed from.
    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Insert a pair, trimming both sides. A later duplicate key overwrites.
    pub(crate) fn insert(&mut self, key: &str, value: &str) {
        self.entries
            .insert(key.trim().to_string(), value.trim().to_string());
    }
}
