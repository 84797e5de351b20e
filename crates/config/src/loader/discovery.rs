//! Directory scanning and layer classification.
//!
//! Responsibilities:
//! - List the configuration directory and pick out the property files.
//! - Classify each file as the default layer, the active profile layer, or neither.
//! - Parse the matching files.
//!
//! Invariants:
//! - Entries are processed in sorted filename order so results are deterministic.
//! - Files that match neither convention are never opened.
//! - Any error aborts the scan; no partial result is returned.

use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{PROP_EXTENSION, is_default_filename, profile_filename};
use crate::error::ConfigError;
use crate::layer::PropertyLayer;
use crate::parser::PropertyFileParser;

/// Layers found in a configuration directory.
#[derive(Debug, Default)]
pub struct LoadedLayers {
    pub default_layer: Option<PropertyLayer>,
    pub profile_layer: Option<PropertyLayer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LayerKind {
    Default,
    Profile,
}

/// Scan `dir` and parse the default and `profile` layers.
///
/// # Errors
///
/// - [`ConfigError::DirectoryRead`] if the directory cannot be listed.
/// - [`ConfigError::NoConfigFile`] if the directory has no entries at all.
/// - [`ConfigError::FileRead`] / [`ConfigError::Parse`] if a matching file fails.
pub fn load_layers(
    dir: &Path,
    profile: &str,
    parser: &PropertyFileParser,
) -> Result<LoadedLayers, ConfigError> {
    let directory_error = |source: std::io::Error| ConfigError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    };

    let mut paths = fs::read_dir(dir)
        .map_err(directory_error)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<Vec<PathBuf>, _>>()
        .map_err(directory_error)?;

    if paths.is_empty() {
        return Err(ConfigError::NoConfigFile {
            path: dir.to_path_buf(),
        });
    }
    paths.sort();

    let profile_file = profile_filename(profile);
    let mut layers = LoadedLayers::default();

    for path in paths {
        let Some(kind) = classify(&path, &profile_file) else {
            continue;
        };
        let layer = parser.parse_file(&path)?;
        match kind {
            LayerKind::Default => layers.default_layer = Some(layer),
            LayerKind::Profile => layers.profile_layer = Some(layer),
        }
    }

    Ok(layers)
}

fn classify(path: &Path, profile_file: &str) -> Option<LayerKind> {
    if path.extension().and_then(|ext| ext.to_str()) != Some(PROP_EXTENSION) {
        return None;
    }
    let name = path.file_name()?.to_str()?;
    if is_default_filename(name) {
        Some(LayerKind::Default)
    } else if name == profile_file {
        Some(LayerKind::Profile)
    } else {
        None
    }
}
