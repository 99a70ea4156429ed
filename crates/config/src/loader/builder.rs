//! Configuration loader builder.
//!
//! Responsibilities:
//! - Collect connection settings from builder calls and `DSM_*` environment variables.
//! - Load an optional `.env` file, gated by `DOTENV_DISABLED`.
//! - Validate and normalize the DSM host into a base URL.
//!
//! Does NOT handle:
//! - Site-prefixed automation variables (see site.rs).
//! - Talking to the DSM server (see client crate).
//!
//! Invariants / Assumptions:
//! - Values applied later win: call `from_env()` first, then `with_*` overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;

use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{DEFAULT_SCHEME, MAX_TIMEOUT_SECS};
use crate::types::{Config, ConnectionConfig, Credentials};

/// Configuration loader that builds config from environment variables and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    host: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    accept_invalid_certs: Option<bool>,
    timeout: Option<Duration>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file exists but has invalid syntax
    /// (`ConfigError::DotenvParse`) or cannot be read (`ConfigError::DotenvIo`).
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Apply `DSM_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    pub fn with_host(mut self, host: String) -> Self {
        self.host = Some(host);
        self
    }

    pub fn with_username(mut self, username: String) -> Self {
        self.username = Some(username);
        self
    }

    pub fn with_password(mut self, password: String) -> Self {
        self.password = Some(SecretString::new(password.into()));
        self
    }

    /// Use an existing credential set (e.g. one resolved for an automation site).
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.host = Some(credentials.host);
        self.username = Some(credentials.username);
        self.password = Some(credentials.password);
        self
    }

    /// Accept any server certificate.
    ///
    /// # Security Warning
    /// Disabling verification exposes the login password and the fetched
    /// database secret to any man-in-the-middle.
    pub fn with_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = Some(accept);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let host = self.host.ok_or(ConfigError::MissingHost)?;
        let base_url = base_url_for_host(&host)?;

        let (Some(username), Some(password)) = (self.username, self.password) else {
            return Err(ConfigError::MissingCredentials);
        };

        if let Some(timeout) = self.timeout {
            validate_timeout(timeout)?;
        }

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                accept_invalid_certs: self.accept_invalid_certs.unwrap_or(false),
                timeout: self.timeout,
            },
            credentials: Credentials {
                host,
                username,
                password,
            },
        })
    }

    pub(crate) fn set_host(&mut self, host: Option<String>) {
        self.host = host;
    }

    pub(crate) fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub(crate) fn set_password(&mut self, password: Option<SecretString>) {
        self.password = password;
    }

    pub(crate) fn set_accept_invalid_certs(&mut self, accept: Option<bool>) {
        self.accept_invalid_certs = accept;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }
}

fn validate_timeout(timeout: Duration) -> Result<(), ConfigError> {
    let secs = timeout.as_secs();
    if secs == 0 {
        return Err(ConfigError::InvalidTimeout {
            message: "timeout must be greater than 0 seconds".to_string(),
        });
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(ConfigError::InvalidTimeout {
            message: format!(
                "timeout exceeds maximum allowed value of {} seconds",
                MAX_TIMEOUT_SECS
            ),
        });
    }
    Ok(())
}

/// Turn a DSM host into a normalized base URL.
///
/// Rules:
/// - Trim surrounding whitespace; blank is `ConfigError::MissingHost`
/// - A bare host (`dsm.example.com`, `10.0.0.1:8443`) gets the `https` scheme
/// - An explicit `http://` or `https://` URL is kept, with the scheme lower-cased
/// - The result must parse as an absolute URL with a host
/// - Trailing slashes are stripped
pub fn base_url_for_host(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingHost);
    }

    let candidate = match trimmed.split_once("://") {
        Some((scheme, rest))
            if scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https") =>
        {
            format!("{}://{rest}", scheme.to_ascii_lowercase())
        }
        Some(_) => {
            return Err(ConfigError::InvalidValue {
                var: "dsm host".into(),
                message: format!("scheme must be http or https, got: {trimmed}"),
            });
        }
        None => format!("{DEFAULT_SCHEME}://{trimmed}"),
    };

    let parsed = url::Url::parse(&candidate).map_err(|e| ConfigError::InvalidValue {
        var: "dsm host".into(),
        message: format!("must be a host name or an absolute http(s) URL: {e}"),
    })?;

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidValue {
            var: "dsm host".into(),
            message: "host is required (e.g. dsm.example.com)".into(),
        });
    }

    Ok(candidate.trim_end_matches('/').to_string())
}
