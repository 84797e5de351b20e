//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test loading default and profile layers from a directory.
//! - Test profile and path precedence across builder, arguments and environment.
//! - Test strict parse mode and `.env` preloading.
//!
//! Does NOT handle:
//! - Parser line handling (tested in parser.rs).
//! - Lookup and expansion rules (tested in store.rs and expand.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::Path;
use std::sync::Mutex;

pub mod dotenv_tests;
pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `files` (name, content) into `dir`.
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        std::fs::write(dir.join(name), content).unwrap();
    }
}

pub const DEFAULT_PROPERTIES: &str = "\
app.name=gconfig test
app.url=https://github.com/narup/gconfig
server.port = 8080
";

pub const DEV_PROPERTIES: &str = "\
app.name=gconfig dev profile
app.url=https://github.com/narup/gconfig-dev
";
