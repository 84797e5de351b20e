//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use gconfig::ConfigError;

/// Structured exit codes for gconfig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Not found - missing key or no configuration files.
    NotFound = 4,

    /// Invalid configuration - malformed file, value or argument.
    InvalidConfig = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingKey(_) | ConfigError::NoConfigFile { .. } => ExitCode::NotFound,
            ConfigError::Parse { .. }
            | ConfigError::InvalidValue { .. }
            | ConfigError::InvalidArgument { .. }
            | ConfigError::DotenvParse { .. } => ExitCode::InvalidConfig,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::InvalidConfig.as_i32(), 5);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err: anyhow::Error = Err::<(), _>(ConfigError::MissingKey("app.name".into()))
            .context("Failed to read key")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_dotenv_errors_map_to_exit_codes() {
        assert_eq!(
            ExitCode::from(&ConfigError::DotenvParse { error_index: 3 }),
            ExitCode::InvalidConfig
        );
        assert_eq!(
            ExitCode::from(&ConfigError::DotenvIo {
                kind: std::io::ErrorKind::PermissionDenied
            }),
            ExitCode::GeneralError
        );
    }

    #[test]
    fn test_non_config_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
