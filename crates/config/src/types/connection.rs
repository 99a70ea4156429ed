//! Connection configuration types for DSM.
//!
//! Responsibilities:
//! - Define connection settings (base URL, TLS verification mode, timeout).
//! - Define the main `Config` structure combining connection and credentials.
//!
//! Does NOT handle:
//! - Configuration loading from the environment (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `base_url` is always normalized: it carries a scheme and no trailing slash.
//! - Certificate verification is on unless `accept_invalid_certs` is set explicitly.

use crate::types::auth::Credentials;
use std::time::Duration;

/// Connection configuration for a DSM server.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the DSM server (e.g. https://dsm.example.com)
    pub base_url: String,
    /// Accept any server certificate. Insecure; must be opted into.
    pub accept_invalid_certs: bool,
    /// Request timeout. `None` keeps the transport default (no timeout).
    pub timeout: Option<Duration>,
}

impl ConnectionConfig {
    /// Connection settings for an already-normalized base URL with secure defaults.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            accept_invalid_certs: false,
            timeout: None,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Login credentials
    pub credentials: Credentials,
}
