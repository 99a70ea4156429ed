//! Main DSM REST API client and API methods.
//!
//! This module provides [`DsmClient`], an authenticated session against one
//! DSM server.
//!
//! # Submodules
//! - [`builder`]: Client construction, configuration and login
//! - `session`: Login handshake helpers (private module)
//! - `resources`: Generic authenticated JSON fetch
//! - `cluster`: Cluster status methods
//! - `secrets`: Secret methods
//! - `connection`: Connection-string assembly
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token storage and header construction (delegated to [`crate::auth::SessionManager`])
//!
//! # Invariants
//! - A `DsmClient` is only handed out by [`builder::DsmClientBuilder::connect`],
//!   after login succeeded, so every API method runs with a bearer token.
//! - Requests are issued one at a time and never retried.

pub mod builder;
mod cluster;
mod connection;
mod resources;
mod secrets;
mod session;

use reqwest::header::HeaderMap;

use crate::auth::SessionManager;
use crate::error::Result;

/// DSM REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use dsm_client::{ConnectionInputs, DsmClient};
/// use dsm_config::Credentials;
///
/// let client = DsmClient::builder()
///     .credentials(Credentials::new("dsm.example.com", "ops@example.com", password))
///     .connect()
///     .await?;
///
/// let inputs = ConnectionInputs::new("postgres", "admin", "mydb")?;
/// let conn = client.get_db_connection_string(&inputs).await?;
/// ```
#[derive(Debug)]
pub struct DsmClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) session_manager: SessionManager,
}

impl DsmClient {
    /// Create a new client builder.
    pub fn builder() -> builder::DsmClientBuilder {
        builder::DsmClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers attached to every authenticated request.
    pub fn headers(&self) -> Result<HeaderMap> {
        self.session_manager.headers()
    }

    pub fn session(&self) -> &SessionManager {
        &self.session_manager
    }
}
