use std::process::Output;

use tokio::process::Command;
use wiremock::MockServer;

/// Admin key the CLI is given in tests.
pub const TEST_KEY: &str = "sk-admin-test";

/// Environment the CLI would otherwise pick up from the developer's shell.
const SCRUBBED_ENV: &[&str] = &[
    "OPENAI_ADMIN_KEY",
    "OPENAI_API_KEY",
    "OPENAI_BASE_URL",
    "OPENAI_ORG_ID",
    "OPENAI_PROJECT_ID",
    "OPENAI_ADMIN_TIMEOUT",
    "RUST_LOG",
];

/// Base URL of a mock server.
pub fn base_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}/v1", server.address().port())
}

/// Run the CLI binary with a scrubbed environment plus `env`.
pub async fn run_cli(args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_openai-admin"));
    cmd.args(args);
    for name in SCRUBBED_ENV {
        cmd.env_remove(name);
    }
    for (name, value) in env {
        cmd.env(name, value);
    }
    cmd.output().await.expect("Failed to execute CLI")
}

/// Run the CLI against a mock server with a valid key.
pub async fn run_cli_against(server: &MockServer, args: &[&str]) -> Output {
    let base = base_url(server);
    run_cli(
        args,
        &[("OPENAI_BASE_URL", base.as_str()), ("OPENAI_ADMIN_KEY", TEST_KEY)],
    )
    .await
}

/// Run the CLI against a mock server and expect success.
pub async fn run_cli_success(server: &MockServer, args: &[&str]) -> String {
    let output = run_cli_against(server, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Split table output into rows of whitespace-separated cells.
pub fn table_rows(stdout: &str) -> Vec<Vec<String>> {
    stdout
        .lines()
        .map(|line| line.split_whitespace().map(str::to_string).collect())
        .collect()
}
