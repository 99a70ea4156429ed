//! Integration tests for the connection string lookup.
//!
//! These tests run the `dsm-cli` binary against a wiremock DSM server and
//! check exactly what is printed on stdout.

mod common;

use common::{dsm_cmd, dsm_cmd_for, mount_cluster, mount_login, mount_secret};
use predicates::prelude::*;
use wiremock::MockServer;

#[tokio::test]
async fn test_prints_postgres_connection_string() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_cluster(&server, "postgresclusters", "mydb", "10.0.0.1", 5432).await;
    // "p@ss"
    mount_secret(&server, "mydb", "cEBzcw==").await;

    dsm_cmd_for(&server.uri(), "postgres", "mydb")
        .assert()
        .success()
        .stdout("postgres://admin:p@ss@10.0.0.1:5432/mydb\n");
}

#[tokio::test]
async fn test_prints_mysql_connection_string() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_cluster(&server, "mysqlclusters", "orders", "10.0.0.2", 3306).await;
    // "pw"
    mount_secret(&server, "orders", "cHc=").await;

    dsm_cmd_for(&server.uri(), "MySQL", "orders")
        .assert()
        .success()
        .stdout("mysql://admin:pw@10.0.0.2:3306/mysqlappuser_data\n");
}

#[tokio::test]
async fn test_flags_fall_back_to_environment() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_cluster(&server, "postgresclusters", "mydb", "10.0.0.1", 5432).await;
    mount_secret(&server, "mydb", "cEBzcw==").await;

    dsm_cmd()
        .env("DSM_HOST", server.uri())
        .env("DSM_USERNAME", "ops@example.com")
        .env("DSM_PASSWORD", "dsm-login-password")
        .env("DSM_DB_ENGINE", "postgres")
        .env("DSM_ADMIN_USERNAME", "admin")
        .env("DSM_DEPLOYMENT_NAME", "mydb")
        .assert()
        .success()
        .stdout("postgres://admin:p@ss@10.0.0.1:5432/mydb\n");
}

#[tokio::test]
async fn test_unknown_engine_is_rejected_before_login() {
    let server = MockServer::start().await;

    dsm_cmd_for(&server.uri(), "oracle", "mydb")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("An error occurred: "))
        .stdout(predicate::str::contains("oracle"));

    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_legacy_engine_fallback() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_cluster(&server, "mysqlclusters", "orders", "10.0.0.2", 3306).await;
    mount_secret(&server, "orders", "cHc=").await;

    dsm_cmd_for(&server.uri(), "MariaDB", "orders")
        .arg("--legacy-engine-fallback")
        .assert()
        .success()
        .stdout("mariadb://admin:pw@10.0.0.2:3306/mysqlappuser_data\n");
}

#[test]
fn test_missing_required_flag_is_usage_error() {
    dsm_cmd()
        .args(["--dsmHost", "dsm.example.com", "--username", "ops@example.com"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--password"));
}

#[tokio::test]
async fn test_logs_do_not_reach_stdout() {
    let server = MockServer::start().await;
    mount_login(&server).await;
    mount_cluster(&server, "postgresclusters", "mydb", "10.0.0.1", 5432).await;
    mount_secret(&server, "mydb", "cEBzcw==").await;

    dsm_cmd_for(&server.uri(), "postgres", "mydb")
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout("postgres://admin:p@ss@10.0.0.1:5432/mydb\n")
        .stderr(predicate::str::contains("Logged in to DSM"))
        .stderr(predicate::str::contains("p@ss").not())
        .stderr(predicate::str::contains("dsm-login-password").not());
}
