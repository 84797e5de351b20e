//! Property file parsing.
//!
//! Responsibilities:
//! - Turn one `key=value` text file into a [`PropertyLayer`].
//! - Skip malformed lines (permissive mode) or reject them (strict mode).
//!
//! Does NOT handle:
//! - Deciding which files belong to which layer (see `loader::discovery`).
//! - Placeholder expansion (values are stored raw, see `expand`).
//!
//! Invariants:
//! - A line is well formed only if it contains exactly one `=`.
//! - Keys and values are trimmed before storage; later duplicates win.
//! - Invalid UTF-8 is replaced, never treated as a read failure.
//! - No comment syntax exists; `#key=value` is an ordinary entry.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::ConfigError;
use crate::layer::PropertyLayer;

/// How the parser treats lines that are not `key=value`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ParseMode {
    /// Malformed lines are dropped without error.
    #[default]
    Permissive,
    /// A malformed non-blank line fails with [`ConfigError::Parse`].
    Strict,
}

/// Reads property files into layers.
#[derive(Debug, Clone, Copy, Default)]
pub struct PropertyFileParser {
    mode: ParseMode,
}

impl PropertyFileParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mode: ParseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }

    /// Open and parse the file at `path`. The layer is named after the file name.
    pub fn parse_file(&self, path: &Path) -> Result<PropertyLayer, ConfigError> {
        let file = File::open(path).map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let source_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        self.parse_lines(BufReader::new(file), &source_name, path)
    }

    /// Parse an already opened stream labelled `source_name`.
    pub fn parse_reader<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
    ) -> Result<PropertyLayer, ConfigError> {
        self.parse_lines(reader, source_name, Path::new(source_name))
    }

    /// Parse in-memory content labelled `source_name`.
    pub fn parse_str(&self, content: &str, source_name: &str) -> Result<PropertyLayer, ConfigError> {
        self.parse_reader(content.as_bytes(), source_name)
    }

    fn parse_lines<R: BufRead>(
        &self,
        reader: R,
        source_name: &str,
        origin: &Path,
    ) -> Result<PropertyLayer, ConfigError> {
        let mut layer = PropertyLayer::new(source_name);
        let mut skipped = 0usize;

        for (index, raw) in reader.split(b'\n').enumerate() {
            let raw = raw.map_err(|source| ConfigError::FileRead {
                path: origin.to_path_buf(),
                source,
            })?;
            let line = String::from_utf8_lossy(&raw);

            match split_property(&line) {
                Some((key, value)) => layer.insert(key, value),
                None if self.mode == ParseMode::Strict && !line.trim().is_empty() => {
                    return Err(ConfigError::Parse {
                        path: origin.to_path_buf(),
                        line: index + 1,
                        message: "expected exactly one '=' between key and value".to_string(),
                    });
                }
                None => skipped += 1,
            }
        }

        tracing::debug!(
            source = source_name,
            entries = layer.len(),
            skipped,
            "Parsed property file"
        );

        Ok(layer)
    }
}

/// Split a line into its key and value parts.
///
/// Returns `None` unless the line contains exactly one `=`.
pub fn split_property(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    if value.contains('=') {
        return None;
    }
    Some((key, value))
}
