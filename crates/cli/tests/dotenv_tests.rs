//! Integration tests for `.env` handling in the CLI.
//!
//! Responsibilities:
//! - Prove that `.env` values feed the `DSM_*` flag fallbacks.
//! - Prove that an invalid `.env` fails at startup without leaking secrets.
//! - Ensure DOTENV_DISABLED=1 skips a malformed `.env`.
//!
//! Invariants:
//! - Tests must explicitly clear `DOTENV_DISABLED` to enable dotenv loading.
//! - Tests use temp directories and set current_dir to isolate `.env` file effects.

mod common;

use common::{dsm_cmd, mount_cluster, mount_login, mount_secret};
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::MockServer;

#[tokio::test]
async fn test_dotenv_supplies_flags() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_cluster(&server, "postgresclusters", "mydb", "10.0.0.1", 5432).await;
    mount_secret(&server, "mydb", "cEBzcw==").await;

    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        format!(
            "DSM_HOST={}\nDSM_USERNAME=ops@example.com\nDSM_PASSWORD=dsm-login-password\nDSM_DB_ENGINE=postgres\nDSM_ADMIN_USERNAME=admin\nDSM_DEPLOYMENT_NAME=mydb\n",
            server.uri()
        ),
    )
    .unwrap();

    dsm_cmd()
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .assert()
        .success()
        .stdout("postgres://admin:p@ss@10.0.0.1:5432/mydb\n");
}

#[test]
fn test_invalid_dotenv_fails_without_leaking_secrets() {
    let temp_dir = TempDir::new().unwrap();
    let secret_value = "supersecret_dsm_password_12345";
    fs::write(
        temp_dir.path().join(".env"),
        format!("DSM_PASSWORD={secret_value}\nINVALID LINE"),
    )
    .unwrap();

    let output = dsm_cmd()
        .current_dir(temp_dir.path())
        .env_remove("DOTENV_DISABLED")
        .output()
        .expect("Failed to run command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(".env"), "stderr: {stderr}");
    assert!(!stderr.contains(secret_value), "stderr leaked secret: {stderr}");
}

#[test]
fn test_dotenv_disabled_skips_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID LINE").unwrap();

    // Reaches clap's required-flag check instead of failing on .env.
    dsm_cmd()
        .current_dir(temp_dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--dsmHost"));
}
