//! Integration tests for structured exit codes.

mod common;

use common::{render_cmd, render_cmd_with_server};
use predicates::prelude::*;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(status: u16, method_name: &str, route: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method(method_name))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(serde_json::json!({"message": "nope"})),
        )
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = server_answering(204, "DELETE", "/v1/services/srv-1").await;
    render_cmd_with_server(&server.uri())
        .args(["services", "delete", "srv-1"])
        .assert()
        .code(0);
}

#[test]
fn test_missing_api_key_returns_exit_code_2() {
    render_cmd()
        .env_remove("API_KEY")
        .args(["services", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("API_KEY"));
}

#[tokio::test]
async fn test_unauthorized_returns_exit_code_2() {
    let server = server_answering(401, "GET", "/v1/services").await;
    render_cmd_with_server(&server.uri())
        .args(["services", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    render_cmd()
        .env("RENDER_BASE_URL", "http://127.0.0.1:1/v1")
        .args(["services", "list"])
        .assert()
        .code(3);
}

#[tokio::test]
async fn test_not_found_returns_exit_code_4() {
    let server = server_answering(404, "DELETE", "/v1/services/srv-missing").await;
    render_cmd_with_server(&server.uri())
        .args(["services", "delete", "srv-missing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("404"));
}

#[tokio::test]
async fn test_unprocessable_returns_exit_code_5() {
    let server = server_answering(422, "POST", "/v1/services").await;
    let temp_dir = tempfile::TempDir::new().unwrap();
    let file = temp_dir.path().join("service.json");
    std::fs::write(&file, r#"{"type": "web_service"}"#).unwrap();

    render_cmd_with_server(&server.uri())
        .args(["services", "create", "--file"])
        .arg(&file)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("422"));
}

#[test]
fn test_invalid_timeout_returns_exit_code_5() {
    render_cmd()
        .args(["--timeout", "0", "services", "list"])
        .assert()
        .code(5);
}

#[tokio::test]
async fn test_rate_limited_returns_exit_code_7() {
    let server = server_answering(429, "GET", "/v1/services").await;
    render_cmd_with_server(&server.uri())
        .args(["services", "list"])
        .assert()
        .code(7);
}

#[tokio::test]
async fn test_service_unavailable_returns_exit_code_8() {
    let server = server_answering(503, "GET", "/v1/owners").await;
    render_cmd_with_server(&server.uri())
        .args(["owners", "--email", "a@x.com"])
        .assert()
        .code(8);
}
