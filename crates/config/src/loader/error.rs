//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//!
//! Does NOT handle:
//! - Errors raised while talking to the DSM server (see client crate).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, values that are not secret).
//! - A missing environment variable (`MissingEnvVar`) is distinct from a present but
//!   unusable parameter set (`InvalidDsmParams`).
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Dsm Connection parameters are invalid, Check action's environment")]
    InvalidDsmParams,

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("DSM host is required. Pass --dsmHost or set DSM_HOST.")]
    MissingHost,

    #[error("DSM username and password are required")]
    MissingCredentials,

    #[error("invalid timeout: {message}")]
    InvalidTimeout { message: String },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
