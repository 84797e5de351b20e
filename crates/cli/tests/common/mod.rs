//! Shared test utilities for gconfig CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a temporary configuration directory with default and dev layers.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.

use assert_cmd::Command;
use tempfile::TempDir;

/// Returns a hermetic `gconfig` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `GC_*` variables from the host are cleared.
pub fn gconfig_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("gconfig");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("GC_PROFILE")
        .env_remove("GC_PATH")
        .env_remove("GC_HOME")
        .env_remove("RUST_LOG");

    cmd
}

/// Creates a config directory with `application.properties` and
/// `application-dev.properties`.
pub fn config_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("application.properties"),
        "app.name=gconfig test\nserver.port=8080\nfeature.enabled=true\napi.key=${GC_CLI_TEST_KEY}\nhosts=a, ${GC_CLI_TEST_HOST:b}\n",
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join("application-dev.properties"),
        "app.name=gconfig dev profile\nbroken line\n",
    )
    .unwrap();
    temp_dir
}
