//! CLI integration tests
//!
//! Runs the `vavoo-extract` binary and checks its JSON contract.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_version_flag() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_help_flag() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("proxy"))
        .stdout(predicate::str::contains("header"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_resolve_outputs_json() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.arg("https://vavoo.to/play/abc123/index.m3u8");

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["destination_url"], "https://vavoo.to/play/abc123/index.m3u8");
    assert_eq!(json["request_headers"]["user-agent"], "VAVOO/2.6");
    assert_eq!(json["request_headers"]["referer"], "https://vavoo.to/");
    assert_eq!(json["mediaflow_endpoint"], "proxy_stream_endpoint");
}

#[test]
fn test_invalid_url_fails() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.arg("https://example.com/video.m3u8");

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"error\""))
        .stderr(predicate::str::contains("Not a valid Vavoo URL"));
}

#[test]
fn test_proxy_flag_does_not_affect_output() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.args([
        "https://vavoo.to/play/abc123/index.m3u8",
        "--proxy",
        "socks5://127.0.0.1:1080",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("proxy_stream_endpoint"));
}

#[test]
fn test_invalid_config_file_fails() {
    let mut config = NamedTempFile::new().unwrap();
    writeln!(config, "[session]\nconnect_timeout_secs = 0").unwrap();

    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.args(["https://vavoo.to/play/1", "--config"]).arg(config.path());

    let output = cmd.output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Timeouts must be greater than zero"));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Timeouts must be greater than zero")
    );
}

#[test]
fn test_invalid_header_reports_json_error() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.args(["https://vavoo.to/play/1", "--header", "NoColonHere"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("\"error\""))
        .stdout(predicate::str::contains("Invalid header"));
}

#[test]
fn test_missing_config_file_is_logged() {
    let mut cmd = cargo_bin_cmd!("vavoo-extract");
    cmd.env_remove("RUST_LOG")
        .args(["https://vavoo.to/play/1", "--verbose", "--config"])
        .arg("/nonexistent/vavoo/config.toml");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("proxy_stream_endpoint"))
        .stderr(predicate::str::contains("Configuration file not found"));
}
