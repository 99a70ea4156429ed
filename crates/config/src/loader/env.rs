//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `DSM_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Site-prefixed automation variables (see site.rs).
//! - Building the final Config (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid boolean/numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(host) = env_var_or_none("DSM_HOST") {
        loader.set_host(Some(host));
    }
    if let Some(username) = env_var_or_none("DSM_USERNAME") {
        loader.set_username(Some(username));
    }
    if let Some(password) = env_var_or_none("DSM_PASSWORD") {
        loader.set_password(Some(SecretString::new(password.into())));
    }
    if let Some(insecure) = env_var_or_none("DSM_INSECURE") {
        loader.set_accept_invalid_certs(Some(insecure.parse().map_err(|_| {
            ConfigError::InvalidValue {
                var: "DSM_INSECURE".to_string(),
                message: "must be true or false".to_string(),
            }
        })?));
    }
    if let Some(timeout) = env_var_or_none("DSM_TIMEOUT") {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: "DSM_TIMEOUT".to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }

    Ok(())
}
