//! Integration tests for the coshell binary

use std::io::Write;
use std::process::Command;

use predicates::prelude::*;
use wiremock::matchers::{body_bytes, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Get path to compiled binary
fn coshell_bin() -> &'static std::path::Path {
    assert_cmd::cargo::cargo_bin!("coshell")
}

/// Write a session config pointing at the given host
fn write_config(dir: &tempfile::TempDir, host: &str) -> std::path::PathBuf {
    let config_path = dir.path().join("config.json");
    let config = serde_json::json!({
        "current-environment": "test",
        "environments": {
            "test": {
                "host": host,
                "tenant": "acme",
                "username": "administrator",
                "password": "secret"
            }
        }
    });
    std::fs::write(&config_path, serde_json::to_string_pretty(&config).unwrap()).unwrap();
    config_path
}

#[test]
fn test_help_flag() {
    let output = Command::new(coshell_bin()).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Interactive administrative shell"));
}

#[test]
fn test_version_flag() {
    let output = Command::new(coshell_bin())
        .arg("--version")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("coshell"));
}

#[test]
fn test_missing_environment_fails_at_startup() {
    let dir = tempfile::TempDir::new().unwrap();
    // Empty config: no environments, nothing to bind as current
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, "{}").unwrap();

    let output = Command::new(coshell_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("-c")
        .arg("get /api/me")
        .env_remove("COSHELL_ENV")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("No active environment").eval(&stderr));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_file_end_to_end() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/journals/import"))
        .and(body_bytes(b"%PDF-1.4 sample".to_vec()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"status": "ok"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(&dir, &mock_server.uri());

    let sample_path = dir.path().join("sample.pdf");
    let mut sample = std::fs::File::create(&sample_path).unwrap();
    sample.write_all(b"%PDF-1.4 sample").unwrap();
    drop(sample);

    let line = format!(
        "import-file /api/journals/import --file={} --tenant=acme",
        sample_path.display()
    );
    let output = Command::new(coshell_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("-c")
        .arg(&line)
        .env_remove("COSHELL_ENV")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "{\n  \"status\": \"ok\"\n}\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_import_file_missing_path_shows_help() {
    let mock_server = MockServer::start().await;

    // Malformed input must never reach the platform
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(&dir, &mock_server.uri());

    let output = Command::new(coshell_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("-c")
        .arg("import-file --file=./data/sample.pdf")
        .env_remove("COSHELL_ENV")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("Invalid value for \"path\"").eval(&stderr));
    assert!(predicate::str::contains("Usage").eval(&stderr));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_renders_code_and_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(
            serde_json::json!({"code": 401, "msg": "You have to be logged in"}),
        ))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(&dir, &mock_server.uri());

    let output = Command::new(coshell_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("-c")
        .arg("get /api/me")
        .env_remove("COSHELL_ENV")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(predicate::str::contains("HTTP 401: You have to be logged in").eval(&stderr));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_textual_body_prints_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/status"))
        .respond_with(ResponseTemplate::new(200).set_body_string("all systems nominal"))
        .mount(&mock_server)
        .await;

    let dir = tempfile::TempDir::new().unwrap();
    let config_path = write_config(&dir, &mock_server.uri());

    let output = Command::new(coshell_bin())
        .arg("--config")
        .arg(&config_path)
        .arg("-c")
        .arg("get /api/status")
        .env_remove("COSHELL_ENV")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "all systems nominal\n");
}
