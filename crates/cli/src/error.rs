//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError and ConfigError values to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Deciding whether to use these codes at all: by default the CLI exits 0
//!   even on failure, and only `--exit-codes` switches them on.
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.

use dsm_client::ClientError;
use dsm_config::ConfigError;

/// Structured exit codes for dsm-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - rejected login or no bearer token.
    AuthenticationFailed = 2,

    /// Connection error - network, timeout, TLS or DNS failure.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,

    /// Resource not found - unknown deployment or secret.
    NotFound = 4,

    /// Validation error - bad parameters or unusable DSM data.
    ///
    /// Scripts should fix the input and not retry the same request.
    ValidationError = 5,

    /// Permission denied - insufficient privileges.
    PermissionDenied = 6,

    /// Service unavailable - HTTP 502/503/504.
    ServiceUnavailable = 8,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) | ClientError::NotAuthenticated => {
                ExitCode::AuthenticationFailed
            }

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { status, .. } => match status {
                400 | 422 => ExitCode::ValidationError,
                401 => ExitCode::AuthenticationFailed,
                403 => ExitCode::PermissionDenied,
                404 => ExitCode::NotFound,
                502..=504 => ExitCode::ServiceUnavailable,
                _ => ExitCode::GeneralError,
            },

            ClientError::InvalidResponse(_)
            | ClientError::InvalidSecret(_)
            | ClientError::UnsupportedEngine(_) => ExitCode::ValidationError,

            ClientError::Config(e) => ExitCode::from(e),
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
            _ => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }

        ExitCode::GeneralError
    }
}
