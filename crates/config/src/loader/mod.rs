//! Configuration loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for the CLI connection settings.
//! - Resolve site-scoped DSM parameters for automation callers.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Persisting configuration (there is no config file).
//!
//! Invariants / Assumptions:
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - Site lookups never consult the `DSM_*` variables and vice versa.

mod builder;
mod env;
mod error;
mod site;

pub use builder::{ConfigLoader, base_url_for_host};
pub use env::env_var_or_none;
pub use error::ConfigError;
pub use site::{check_dsm_params, dsm_connection_config, dsm_params_for_site};

#[cfg(test)]
mod tests;
