//! Shared test utilities for render-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Point commands at a wiremock server standing in for the Render API.
//!
//! Invariants / Assumptions:
//! - `API_KEY` is set to "test-key" unless overridden.
//! - No host `RENDER_*` or `OWNER_CREDENTIALS` value reaches the child process.

use assert_cmd::Command;

/// Returns a hermetic `render-cli` command for integration testing.
pub fn render_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("render-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    cmd.env("API_KEY", "test-key");

    cmd.env_remove("OWNER_CREDENTIALS")
        .env_remove("RENDER_BASE_URL")
        .env_remove("RENDER_TIMEOUT")
        .env_remove("RENDER_DEFAULT_LIMIT")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `render-cli` command aimed at `{server_uri}/v1`.
#[allow(dead_code)]
pub fn render_cmd_with_server(server_uri: &str) -> Command {
    let mut cmd = render_cmd();
    cmd.env("RENDER_BASE_URL", format!("{}/v1", server_uri));
    cmd
}
