//! Integration tests for `.env` handling in the CLI.
//!
//! Invariants:
//! - Tests clear `DOTENV_DISABLED` explicitly to enable dotenv loading.
//! - Tests run the binary in a temp directory so only the test's `.env` is seen.

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn cli_in(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-cli");
    cmd.current_dir(dir.path())
        .env_remove("DOTENV_DISABLED")
        .env_remove("API_KEY")
        .env_remove("OWNER_CREDENTIALS")
        .env_remove("RENDER_BASE_URL")
        .env_remove("RENDER_TIMEOUT")
        .env_remove("RENDER_DEFAULT_LIMIT");
    cmd
}

#[tokio::test]
async fn test_dotenv_supplies_credentials() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/services"))
        .and(header("Authorization", "Bearer from-dotenv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join(".env"),
        format!(
            "API_KEY=from-dotenv\nRENDER_BASE_URL={}/v1\n",
            server.uri()
        ),
    )
    .unwrap();

    cli_in(&temp_dir)
        .args(["services", "list"])
        .assert()
        .success();
}

#[test]
fn test_invalid_dotenv_fails_without_leaking_secret() {
    let temp_dir = TempDir::new().unwrap();
    let secret = "rnd_supersecret_cli_key";
    fs::write(
        temp_dir.path().join(".env"),
        format!("API_KEY={}\nINVALID_LINE", secret),
    )
    .unwrap();

    cli_in(&temp_dir)
        .args(["services", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains(".env").and(predicate::str::contains(secret).not()));
}

#[test]
fn test_dotenv_disabled_skips_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join(".env"), "INVALID_LINE").unwrap();

    // Gets past dotenv loading and fails on the missing key instead.
    cli_in(&temp_dir)
        .env("DOTENV_DISABLED", "1")
        .args(["services", "list"])
        .assert()
        .code(2);
}
