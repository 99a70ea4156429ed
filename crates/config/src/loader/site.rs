//! Site-scoped DSM parameters for automation actions.
//!
//! Responsibilities:
//! - Read `{site}_dsm_user_id`, `{site}_dsm_password` and `{site}_dsm_hostname`.
//! - Validate the resulting parameter list before anything talks to the network.
//!
//! Does NOT handle:
//! - The `DSM_*` variables that back the CLI flags (see env.rs).
//! - Empty/whitespace filtering: values are taken verbatim and an empty value
//!   is a validation failure, not an unset variable.
//!
//! Invariants:
//! - A missing variable yields `ConfigError::MissingEnvVar`; a present but empty
//!   value yields `ConfigError::InvalidDsmParams`.
//! - Parameter lists are ordered `[host, user id, password]`.

use secrecy::SecretString;
use std::env::{self, VarError};

use super::error::ConfigError;
use crate::constants::{
    DSM_PARAM_COUNT, SITE_HOSTNAME_SUFFIX, SITE_PASSWORD_SUFFIX, SITE_USER_ID_SUFFIX,
};
use crate::types::DsmConnectionConfig;

/// Validate a DSM parameter list.
///
/// A valid list is `[host, user id, password]`: exactly three elements, none empty.
pub fn check_dsm_params<S: AsRef<str>>(params: &[S]) -> bool {
    params.len() == DSM_PARAM_COUNT && params.iter().all(|p| !p.as_ref().is_empty())
}

/// Build the connection configuration from a `[host, user id, password]` list.
pub fn dsm_connection_config(params: [String; DSM_PARAM_COUNT]) -> DsmConnectionConfig {
    let [dsm_host, dsm_user_id, dsm_password] = params;
    DsmConnectionConfig {
        dsm_host,
        dsm_user_id,
        dsm_password: SecretString::new(dsm_password.into()),
    }
}

/// Resolve the DSM connection parameters configured for `site`.
///
/// # Errors
///
/// Returns [`ConfigError::MissingEnvVar`] naming the first absent variable, and
/// [`ConfigError::InvalidDsmParams`] when any of the values is empty.
pub fn dsm_params_for_site(site: &str) -> Result<DsmConnectionConfig, ConfigError> {
    let user_id = site_var(site, SITE_USER_ID_SUFFIX)?;
    let password = site_var(site, SITE_PASSWORD_SUFFIX)?;
    let host = site_var(site, SITE_HOSTNAME_SUFFIX)?;

    let params = [host, user_id, password];
    if !check_dsm_params(&params) {
        return Err(ConfigError::InvalidDsmParams);
    }

    tracing::debug!(site, host = %params[0], "Resolved DSM parameters for site");

    Ok(dsm_connection_config(params))
}

fn site_var(site: &str, suffix: &str) -> Result<String, ConfigError> {
    let name = format!("{site}{suffix}");
    match env::var(&name) {
        Ok(value) => Ok(value),
        Err(VarError::NotPresent) => Err(ConfigError::MissingEnvVar(name)),
        Err(VarError::NotUnicode(_)) => Err(ConfigError::InvalidValue {
            var: name,
            message: "must be valid UTF-8".to_string(),
        }),
    }
}
