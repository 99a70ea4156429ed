//! Session token storage and default request headers.
//!
//! Responsibilities:
//! - Hold the credentials used for the login handshake.
//! - Store the bearer token returned by DSM and build the headers every
//!   authenticated request carries.
//! - Extract the token from a login response's `Authorization` header.
//!
//! Does NOT handle:
//! - The login HTTP call itself (see `endpoints::auth`).
//! - Token refresh or re-login: a session is authenticated once and stays so.
//!
//! Invariants:
//! - `headers()` fails with `ClientError::NotAuthenticated` until a token is set.
//! - The token and password never appear in `Debug` output.

use dsm_config::Credentials;
use dsm_config::constants::BEARER_PREFIX;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, MISSING_BEARER_MESSAGE, Result};

/// Value of the `Accept` header sent on authenticated requests.
pub const ACCEPT_VALUE: &str = "application/json, text/plain, */*";

/// Manages the DSM session for one client.
#[derive(Debug)]
pub struct SessionManager {
    credentials: Credentials,
    token: Option<SecretString>,
}

impl SessionManager {
    /// Create an unauthenticated session for the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            token: None,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Check whether login has stored a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Store the token received from a successful login.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(SecretString::new(token.into()));
    }

    /// Get the bearer token, if logged in.
    pub fn bearer_token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    /// Headers for an authenticated request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotAuthenticated`] before login, and
    /// [`ClientError::AuthFailed`] if the stored token is not valid header text.
    pub fn headers(&self) -> Result<HeaderMap> {
        let token = self.bearer_token().ok_or(ClientError::NotAuthenticated)?;

        let mut authorization = HeaderValue::from_str(&format!("{BEARER_PREFIX}{token}"))
            .map_err(|_| {
                ClientError::AuthFailed("session token is not a valid header value".to_string())
            })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_VALUE));
        headers.insert(AUTHORIZATION, authorization);
        Ok(headers)
    }
}

/// Extract the token from a login response's `Authorization` header value.
///
/// The value must start with `"Bearer "`; the token is everything after it,
/// taken verbatim.
pub fn parse_bearer_token(header: Option<&str>) -> Result<String> {
    header
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::to_string)
        .ok_or_else(|| ClientError::AuthFailed(MISSING_BEARER_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn credentials() -> Credentials {
        Credentials::new(
            "dsm.example.com",
            "ops@example.com",
            SecretString::new("hunter2".to_string().into()),
        )
    }

    #[test]
    fn test_new_session_is_unauthenticated() {
        let manager = SessionManager::new(credentials());
        assert!(!manager.is_authenticated());
        assert!(manager.bearer_token().is_none());
        assert!(matches!(
            manager.headers(),
            Err(ClientError::NotAuthenticated)
        ));
    }

    #[test]
    fn test_headers_after_login() {
        let mut manager = SessionManager::new(credentials());
        manager.set_token("abc123".to_string());

        let headers = manager.headers().unwrap();
        assert_eq!(headers[CONTENT_TYPE], "application/json");
        assert_eq!(headers[ACCEPT], ACCEPT_VALUE);
        assert_eq!(headers[AUTHORIZATION], "Bearer abc123");
        assert!(headers[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_debug_hides_token_and_password() {
        let mut manager = SessionManager::new(credentials());
        manager.set_token("token-value-xyz".to_string());

        let debug = format!("{manager:?}");
        assert!(!debug.contains("token-value-xyz"));
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("ops@example.com"));
    }

    #[test]
    fn test_parse_bearer_token() {
        assert_eq!(parse_bearer_token(Some("Bearer abc123")).unwrap(), "abc123");
        assert_eq!(parse_bearer_token(Some("Bearer ")).unwrap(), "");
    }

    #[test]
    fn test_parse_bearer_token_rejects_missing_or_other_schemes() {
        for header in [None, Some(""), Some("Basic abc"), Some("bearer abc"), Some("Bearerabc")] {
            let err = parse_bearer_token(header).unwrap_err();
            assert!(
                matches!(err, ClientError::AuthFailed(ref msg) if msg == MISSING_BEARER_MESSAGE),
                "unexpected error for {header:?}: {err:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_bearer_token_is_suffix_verbatim(token in "[ -~]{0,64}") {
            let header = format!("Bearer {token}");
            prop_assert_eq!(parse_bearer_token(Some(&header)).unwrap(), token);
        }

        #[test]
        fn prop_non_bearer_header_never_yields_token(value in "[ -~]{0,64}") {
            prop_assume!(!value.starts_with("Bearer "));
            prop_assert!(matches!(
                parse_bearer_token(Some(&value)),
                Err(ClientError::AuthFailed(_))
            ));
        }
    }
}
