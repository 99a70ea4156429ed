//! Client builder for constructing [`DsmClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Deriving the base URL from the DSM host when none is given
//! - Configuring the underlying HTTP client (timeouts, TLS verification, redirects)
//! - Performing the login that turns a configuration into a usable client
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`DsmClient`] methods)
//! - Token storage (handled by [`SessionManager`] in `auth.rs`)
//!
//! # Invariants
//! - `credentials` is required; `base_url` defaults to `https://{credentials.host}`
//! - The base URL is always normalized to have no trailing slashes
//! - Certificate verification is on unless `danger_accept_invalid_certs(true)` is set
//! - `danger_accept_invalid_certs` only affects HTTPS connections; HTTP URLs log a warning

use std::time::Duration;

use dsm_config::constants::DEFAULT_MAX_REDIRECTS;
use dsm_config::{Config, Credentials, base_url_for_host};

use crate::auth::SessionManager;
use crate::client::DsmClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`DsmClient`].
///
/// # Example
///
/// ```rust,ignore
/// use dsm_client::DsmClient;
/// use dsm_config::Credentials;
/// use secrecy::SecretString;
///
/// let client = DsmClient::builder()
///     .credentials(Credentials::new(
///         "dsm.example.com",
///         "ops@example.com",
///         SecretString::new("password".to_string().into()),
///     ))
///     .timeout(Duration::from_secs(60))
///     .connect()
///     .await?;
/// ```
#[derive(Default)]
pub struct DsmClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    accept_invalid_certs: bool,
    timeout: Option<Duration>,
}

impl DsmClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the DSM server, e.g. `https://dsm.example.com`.
    ///
    /// Overrides the URL derived from the credentials' host.
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the login credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Accept any server certificate, including self-signed and expired ones.
    ///
    /// # Security Warning
    /// The login password, the bearer token and the fetched database password
    /// all travel over this connection. Only enable this against servers you
    /// reach over a trusted network.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Set the request timeout. By default requests have no timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Create a client builder from configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(config.credentials.clone());
        self.accept_invalid_certs = config.connection.accept_invalid_certs;
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the HTTP client and log in.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if no credentials were provided,
    /// `ClientError::Config` if the host is not a usable URL, and any error of
    /// the login call (`HttpError`, `ApiError`, `AuthFailed`).
    pub async fn connect(self) -> Result<DsmClient> {
        let mut client = self.build()?;
        client.login().await?;
        Ok(client)
    }

    fn normalize_base_url(url: String) -> String {
        let url = url.trim_end_matches('/');
        match url.split_once("://") {
            Some((scheme, rest)) => format!("{}://{rest}", scheme.to_ascii_lowercase()),
            None => url.to_string(),
        }
    }

    /// Build an unauthenticated client.
    fn build(self) -> Result<DsmClient> {
        let credentials = self.credentials.ok_or_else(|| {
            ClientError::InvalidUrl("credentials with a DSM host are required".to_string())
        })?;

        let base_url = match self.base_url {
            Some(url) => Self::normalize_base_url(url),
            None => base_url_for_host(&credentials.host)?,
        };

        let mut http_builder = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS));

        if let Some(timeout) = self.timeout {
            http_builder = http_builder.timeout(timeout);
        }

        if self.accept_invalid_certs {
            if base_url.starts_with("https://") {
                tracing::warn!(
                    base_url = %base_url,
                    "TLS certificate verification is disabled for this DSM connection"
                );
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "danger_accept_invalid_certs has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(DsmClient {
            http,
            base_url,
            session_manager: SessionManager::new(credentials),
        })
    }
}
