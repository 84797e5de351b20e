//! Tests for dotenv loading behavior.
//!
//! Responsibilities:
//! - Test that missing `.env` files are silently ignored.
//! - Test that `.env` values become visible to placeholder expansion.
//! - Test that invalid `.env` files return errors without leaking secrets.
//! - Test that `DOTENV_DISABLED=1`/`true` skips dotenv loading.
//!
//! Invariants / Assumptions:
//! - Tests use `env_lock()` and `#[serial]` to prevent cross-test contamination.
//! - Tests must serialize mutations to process-global state (cwd/env).

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tempfile::TempDir;

use super::{env_lock, write_files};
use crate::error::ConfigError;
use crate::loader::builder::ConfigLoader;

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

#[test]
#[serial]
fn test_missing_dotenv_is_ok() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_var_unset("DOTENV_DISABLED", || {
        let result = ConfigLoader::new().load_dotenv();
        assert!(result.is_ok(), "Missing .env file should be silently ignored");
    });
}

#[test]
#[serial]
fn test_dotenv_values_feed_placeholders() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "GC_TEST_DOTENV_KEY=from-dotenv\n").unwrap();
    let config_dir = temp_dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();
    write_files(
        &config_dir,
        &[("application.properties", "api.key=${GC_TEST_DOTENV_KEY}\n")],
    );

    temp_env::with_vars(
        [
            ("DOTENV_DISABLED", None::<&str>),
            ("GC_TEST_DOTENV_KEY", None),
        ],
        || {
            let store = ConfigLoader::new()
                .load_dotenv()
                .unwrap()
                .with_path(&config_dir)
                .load()
                .unwrap();
            assert_eq!(store.get_string("api.key"), "from-dotenv");
        },
    );
}

#[test]
#[serial]
fn test_dotenv_parse_error_does_not_leak_secrets() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    let secret_value = "supersecret_token_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("GC_TEST_SECRET={}\nINVALID_LINE_WITHOUT_EQUALS", secret_value),
    )
    .unwrap();

    temp_env::with_vars(
        [("DOTENV_DISABLED", None::<&str>), ("GC_TEST_SECRET", None)],
        || {
            let result = ConfigLoader::new().load_dotenv();

            match &result {
                Err(e @ ConfigError::DotenvParse { .. }) => {
                    let error_string = e.to_string();
                    assert!(
                        !error_string.contains(secret_value),
                        "Error message should NOT contain the secret value: {}",
                        error_string
                    );
                    assert!(
                        error_string.contains("DOTENV_DISABLED"),
                        "Error should hint about DOTENV_DISABLED: {}",
                        error_string
                    );
                }
                Err(other) => panic!("Expected DotenvParse error, got {}", other),
                Ok(_) => panic!("Expected error for invalid .env file, got Ok"),
            }
        },
    );
}

#[test]
#[serial]
fn test_dotenv_disabled_values() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = TempDir::new().unwrap();
    let _cwd_guard = CwdGuard::new(&temp_dir);

    fs::write(temp_dir.path().join(".env"), "INVALID_LINE_WITHOUT_EQUALS").unwrap();

    for disabled in ["1", "true"] {
        temp_env::with_var("DOTENV_DISABLED", Some(disabled), || {
            assert!(
                ConfigLoader::new().load_dotenv().is_ok(),
                "DOTENV_DISABLED={} should skip .env loading even if file is invalid",
                disabled
            );
        });
    }

    temp_env::with_var("DOTENV_DISABLED", Some("false"), || {
        assert!(matches!(
            ConfigLoader::new().load_dotenv(),
            Err(ConfigError::DotenvParse { .. })
        ));
    });
}
