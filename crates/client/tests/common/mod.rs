//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the DSM client against a wiremock server.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients connect over plain HTTP to the mock server; no TLS is involved

#[allow(unused_imports)]
pub use dsm_client::testing::load_fixture;

#[allow(unused_imports)]
pub use dsm_client::{ClientError, DsmClient, endpoints};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use dsm_config::Credentials;
use secrecy::SecretString;
use wiremock::matchers::{method, path};

pub const TEST_USER: &str = "ops@example.com";
pub const TEST_PASSWORD: &str = "dsm-login-password";
pub const TEST_TOKEN: &str = "test-bearer-token-1234";

pub fn test_credentials() -> Credentials {
    Credentials::new(
        "dsm.invalid",
        TEST_USER,
        SecretString::new(TEST_PASSWORD.to_string().into()),
    )
}

/// Mount a login handler that answers with `Authorization: Bearer {token}`.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer, token: &str) {
    Mock::given(method("POST"))
        .and(path("/provider/session"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("Authorization", format!("Bearer {token}")),
        )
        .mount(server)
        .await;
}

/// Log in to the mock server and return the connected client.
#[allow(dead_code)]
pub async fn connect(server: &MockServer) -> DsmClient {
    mount_login(server, TEST_TOKEN).await;
    DsmClient::builder()
        .credentials(test_credentials())
        .base_url(server.uri())
        .connect()
        .await
        .expect("login against mock server")
}
