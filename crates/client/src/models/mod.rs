//! Data models for DSM API responses and connection assembly.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access.

pub mod cluster;
pub mod connection;
pub mod engine;
pub mod secret;

pub use cluster::{ClusterConnectionInfo, ClusterResource, ClusterStatus};
pub use connection::{ConnectionInputs, ConnectionString};
pub use engine::DatabaseEngine;
pub use secret::{decode_secret_password, encoded_password};
