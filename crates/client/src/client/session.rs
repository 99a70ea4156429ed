//! Client-level login helper.
//!
//! # What this module does NOT handle:
//! - Token storage and header construction (handled by [`SessionManager`](crate::auth::SessionManager))
//! - The HTTP exchange itself (handled by [`endpoints::login`])
//!
//! # Invariants
//! - Login runs exactly once per client, from `DsmClientBuilder::connect`.

use secrecy::ExposeSecret;

use crate::client::DsmClient;
use crate::endpoints;
use crate::error::Result;

impl DsmClient {
    /// Open the session and store the returned bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::ApiError`](crate::ClientError::ApiError) if DSM
    /// rejects the login and [`ClientError::AuthFailed`](crate::ClientError::AuthFailed)
    /// if the response carries no bearer token.
    pub(crate) async fn login(&mut self) -> Result<()> {
        let credentials = self.session_manager.credentials();
        let token = endpoints::login(
            &self.http,
            &self.base_url,
            &credentials.username,
            credentials.password.expose_secret(),
        )
        .await?;

        self.session_manager.set_token(token);
        tracing::info!(base_url = %self.base_url, "Logged in to DSM");
        Ok(())
    }
}
