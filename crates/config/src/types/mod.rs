//! Configuration type definitions for DSM.
//!
//! Responsibilities:
//! - Define configuration types for credentials and connections.
//!
//! Does NOT handle:
//! - Configuration loading from environment variables (see `loader` module).
//! - Actual network connections or authentication flows (see client crate).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.

mod auth;
mod connection;

pub use auth::{Credentials, DsmConnectionConfig};
pub use connection::{Config, ConnectionConfig};
