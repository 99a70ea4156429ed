//! Shared test utilities for dsm-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Mount the DSM endpoints a successful lookup touches on a wiremock server.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - `DSM_*` variables from the host environment never reach the child process.

use assert_cmd::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Returns a hermetic `dsm-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - Every `DSM_*` env var is cleared to ensure no leakage from the host.
pub fn dsm_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("dsm-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env_remove("RUST_LOG");
    for (key, _) in std::env::vars() {
        if key.starts_with("DSM_") {
            cmd.env_remove(&key);
        }
    }

    cmd
}

/// Returns a hermetic command with every required flag pointing at `base_url`.
#[allow(dead_code)]
pub fn dsm_cmd_for(base_url: &str, engine: &str, deployment: &str) -> Command {
    let mut cmd = dsm_cmd();
    cmd.args([
        "--dsmHost",
        base_url,
        "--username",
        "ops@example.com",
        "--password",
        "dsm-login-password",
        "--dbEngine",
        engine,
        "--adminUsername",
        "admin",
        "--deploymentName",
        deployment,
    ]);
    cmd
}

/// Mount a login handler returning `Authorization: Bearer test-token`.
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/provider/session"))
        .respond_with(ResponseTemplate::new(200).insert_header("Authorization", "Bearer test-token"))
        .mount(server)
        .await;
}

/// Mount a cluster resource with the given connection host/port.
#[allow(dead_code)]
pub async fn mount_cluster(server: &MockServer, collection: &str, name: &str, host: &str, port: u16) {
    Mock::given(method("GET"))
        .and(path(format!(
            "/apis/databases.dataservices.vmware.com/v1alpha1/namespaces/default/{collection}/{name}"
        )))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": {"connection": {"host": host, "port": port}}
        })))
        .mount(server)
        .await;
}

/// Mount a secret whose `data.password` is the given base64 text.
#[allow(dead_code)]
pub async fn mount_secret(server: &MockServer, name: &str, encoded_password: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/namespaces/default/secrets/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": {"password": encoded_password}
        })))
        .mount(server)
        .await;
}
