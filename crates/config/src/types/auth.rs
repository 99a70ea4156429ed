//! Credential types for DSM configuration.
//!
//! Responsibilities:
//! - Define the login credentials used to open a DSM session.
//! - Define the site-scoped connection parameters read from the environment.
//!
//! Does NOT handle:
//! - The login exchange itself (see client crate).
//! - Reading environment variables (see `loader::site`).
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Credentials are immutable once built; there is no setter.

use secrecy::SecretString;

/// Login credentials for a DSM server.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// DSM host as supplied by the caller (e.g. `dsm.example.com`).
    pub host: String,
    /// Login email / user id.
    pub username: String,
    /// Login password.
    pub password: SecretString,
}

impl Credentials {
    /// Create a credential set.
    pub fn new(host: impl Into<String>, username: impl Into<String>, password: SecretString) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password,
        }
    }
}

/// DSM connection parameters resolved for an automation site.
#[derive(Debug, Clone)]
pub struct DsmConnectionConfig {
    pub dsm_host: String,
    pub dsm_user_id: String,
    pub dsm_password: SecretString,
}

impl DsmConnectionConfig {
    /// Convert into login credentials.
    pub fn into_credentials(self) -> Credentials {
        Credentials {
            host: self.dsm_host,
            username: self.dsm_user_id,
            password: self.dsm_password,
        }
    }
}
