//! DSM (Data Services Manager) REST API client.
//!
//! This crate logs in to a DSM server, looks up a provisioned database
//! cluster and its secret, and assembles a ready-to-use connection string.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;
mod serde_helpers;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::{ACCEPT_VALUE, SessionManager, parse_bearer_token};
pub use client::DsmClient;
pub use client::builder::DsmClientBuilder;
pub use error::{ClientError, ErrorCategory, MISSING_BEARER_MESSAGE, Result};
pub use models::{
    ClusterConnectionInfo, ConnectionInputs, ConnectionString, DatabaseEngine,
    decode_secret_password,
};
