use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-access-token";

/// Base URL of a mock Terrain server.
pub fn base_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}", server.address().port())
}

/// Mount a token endpoint accepting `alice` / `secret`.
pub async fn mount_token(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/terrain/token"))
        .and(header("authorization", "Basic YWxpY2U6c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": TOKEN,
            "expires_in": 28800
        })))
        .mount(server)
        .await;
}

/// Run the CLI with an isolated HOME so the saved session stays in `home`.
pub fn run_cli_with_env(args: &[&str], home: &Path, base_url: &str, stdin: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_terrain"));
    cmd.args(args)
        .env("HOME", home)
        .env("XDG_DATA_HOME", home.join("data"))
        .env("TERRAIN_BASE_URL", base_url)
        .env("NO_COLOR", "1")
        .env_remove("TERRAIN_USERNAME")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd.spawn().expect("Failed to execute CLI");
    {
        let mut pipe = child.stdin.take().expect("stdin is piped");
        if let Some(input) = stdin {
            pipe.write_all(input.as_bytes()).expect("Failed to write stdin");
        }
    }
    child.wait_with_output().expect("Failed to wait for CLI")
}

/// Run the CLI and expect success, returning stdout.
pub fn run_cli_with_env_success(
    args: &[&str],
    home: &Path,
    base_url: &str,
    stdin: Option<&str>,
) -> String {
    let output = run_cli_with_env(args, home, base_url, stdin);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Log in as alice against the mock server.
pub fn login(home: &Path, base_url: &str) -> String {
    run_cli_with_env_success(
        &["login", "--username", "alice", "--password-stdin"],
        home,
        base_url,
        Some("secret\n"),
    )
}
