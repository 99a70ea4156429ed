//! Error types for the DSM client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Message used when a login response carries no usable bearer token.
pub const MISSING_BEARER_MESSAGE: &str = "Login didn't return a Bearer token";

/// Errors that can occur during DSM client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login succeeded at the HTTP level but produced no bearer token.
    #[error("{0}")]
    AuthFailed(String),

    /// Session headers were requested before a successful login.
    #[error("No DSM session: login has not completed")]
    NotAuthenticated,

    /// HTTP request error (connection, DNS, TLS, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success HTTP status from DSM.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body is not JSON or lacks an expected field.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The fetched secret could not be decoded into a password.
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// Database engine outside the supported set.
    #[error("Unsupported database engine '{0}' (expected postgres or mysql)")]
    UnsupportedEngine(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Connection settings could not be resolved.
    #[error(transparent)]
    Config(#[from] dsm_config::ConfigError),
}

/// Coarse failure class of a [`ClientError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Connection, DNS, TLS or HTTP status failures.
    Transport,
    /// Missing or malformed bearer token.
    Authentication,
    /// Missing JSON keys, malformed JSON or base64.
    Data,
    /// Invalid or missing parameters.
    Configuration,
}

impl ClientError {
    /// Classify this error.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpError(_) | Self::ApiError { .. } | Self::InvalidUrl(_) => {
                ErrorCategory::Transport
            }
            Self::AuthFailed(_) | Self::NotAuthenticated => ErrorCategory::Authentication,
            Self::InvalidResponse(_) | Self::InvalidSecret(_) => ErrorCategory::Data,
            Self::UnsupportedEngine(_) | Self::Config(_) => ErrorCategory::Configuration,
        }
    }
}
