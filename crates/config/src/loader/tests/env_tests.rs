//! Environment variable tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test GC_PROFILE and GC_PATH handling and their precedence.
//! - Test handling of empty and whitespace-only environment variables.
//! - Test placeholder expansion against the process environment after a load.

use serial_test::serial;
use tempfile::TempDir;

use super::{DEFAULT_PROPERTIES, DEV_PROPERTIES, env_lock, write_files};
use crate::loader::builder::ConfigLoader;

fn config_dir() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    write_files(
        temp_dir.path(),
        &[
            ("application.properties", DEFAULT_PROPERTIES),
            ("application-dev.properties", DEV_PROPERTIES),
            (
                "application-qa.properties",
                "api.key=${GC_TEST_CAPI_API_KEY}\napi.fallback=${GC_TEST_CAPI_API_KEY:default}\n",
            ),
        ],
    );
    temp_dir
}

#[test]
#[serial]
fn test_env_selects_profile_and_path() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = config_dir();

    temp_env::with_vars(
        [
            ("GC_PROFILE", Some("dev")),
            ("GC_PATH", Some(temp_dir.path().to_str().unwrap())),
        ],
        || {
            let store = ConfigLoader::new().from_env().load().unwrap();
            assert_eq!(store.profile(), "dev");
            assert_eq!(store.get_string("app.name"), "gconfig dev profile");
        },
    );
}

#[test]
#[serial]
fn test_builder_values_take_precedence_over_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = config_dir();
    let other_dir = TempDir::new().unwrap();

    temp_env::with_vars(
        [
            ("GC_PROFILE", Some("prod")),
            ("GC_PATH", Some(other_dir.path().to_str().unwrap())),
        ],
        || {
            let store = ConfigLoader::new()
                .with_profile("dev")
                .with_path(temp_dir.path())
                .from_env()
                .load()
                .unwrap();
            assert_eq!(store.profile(), "dev");
            assert_eq!(store.get_string("app.name"), "gconfig dev profile");
        },
    );
}

#[test]
#[serial]
fn test_args_take_precedence_over_env() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = config_dir();
    let path_arg = format!("--path={}", temp_dir.path().display());

    temp_env::with_vars([("GC_PROFILE", Some("prod"))], || {
        let store = ConfigLoader::new()
            .with_args([path_arg.as_str(), "-profile", "dev"])
            .unwrap()
            .from_env()
            .load()
            .unwrap();
        assert_eq!(store.profile(), "dev");
    });
}

#[test]
#[serial]
fn test_whitespace_only_env_vars_treated_as_unset() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = config_dir();

    temp_env::with_vars(
        [("GC_PROFILE", Some("   ")), ("GC_PATH", Some(""))],
        || {
            let loader = ConfigLoader::new().with_path(temp_dir.path()).from_env();
            assert_eq!(loader.resolved_profile(), "local");
            assert_eq!(loader.resolved_path().unwrap(), temp_dir.path());
        },
    );
}

#[test]
#[serial]
fn test_fallback_path_uses_gc_home() {
    let _lock = env_lock().lock().unwrap();
    let home = TempDir::new().unwrap();
    let config = home.path().join("config");
    std::fs::create_dir(&config).unwrap();
    write_files(&config, &[("application.properties", DEFAULT_PROPERTIES)]);

    temp_env::with_vars(
        [
            ("GC_HOME", Some(home.path().to_str().unwrap())),
            ("GC_PATH", None),
            ("GC_PROFILE", None),
        ],
        || {
            let store = ConfigLoader::new().from_env().load().unwrap();
            assert_eq!(store.get_string("app.name"), "gconfig test");
        },
    );
}

#[test]
#[serial]
fn test_placeholders_read_process_environment() {
    let _lock = env_lock().lock().unwrap();
    let temp_dir = config_dir();

    let store = ConfigLoader::new()
        .with_path(temp_dir.path())
        .with_profile("qa")
        .load()
        .unwrap();

    temp_env::with_vars([("GC_TEST_CAPI_API_KEY", Some("CAPIAPI"))], || {
        assert_eq!(store.get_string("api.key"), "CAPIAPI");
        assert_eq!(store.get_string_or_default("api.fallback"), "CAPIAPI");
    });

    temp_env::with_vars([("GC_TEST_CAPI_API_KEY", None::<&str>)], || {
        assert_eq!(store.get_string("api.key"), "");
        assert_eq!(store.get_string_or_default("api.fallback"), "default");
    });
}
