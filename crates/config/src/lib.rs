//! Configuration management for the DSM connection tools.
//!
//! This crate provides types and loaders for DSM connection settings taken
//! from command-line overrides, `DSM_*` environment variables, a `.env` file,
//! or the site-prefixed variables used by automation actions.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, base_url_for_host, check_dsm_params, dsm_connection_config,
    dsm_params_for_site, env_var_or_none,
};
pub use types::{Config, ConnectionConfig, Credentials, DsmConnectionConfig};
