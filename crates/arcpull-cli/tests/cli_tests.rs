//! Integration tests for arcpull-cli.
//!
//! Note: Tests use `unwrap`/`expect` which is acceptable in test code.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

fn arcpull_cmd() -> Command {
    cargo_bin_cmd!("arcpull")
}

#[test]
fn test_version_flag() {
    arcpull_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("arcpull"));
}

#[test]
fn test_help_flag() {
    arcpull_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Command-line utility"));
}

#[test]
fn test_missing_url_reports_required_input() {
    arcpull_cmd()
        .assert()
        .failure()
        .stdout(predicate::str::contains("fileUrl"))
        .stdout(predicate::str::contains("HINT"));
}

#[test]
fn test_invalid_url_rejected() {
    arcpull_cmd()
        .arg("definitely not a url")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Could not parse"));
}

/// Unsupported suffixes must be rejected before any download is
/// attempted, so this works with nothing listening on the target port.
#[test]
fn test_unsupported_format_rejected_offline() {
    let storage = TempDir::new().expect("failed to create temp dir");

    arcpull_cmd()
        .arg("http://127.0.0.1:9/archive.rar")
        .arg("--storage-dir")
        .arg(storage.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("not supported"))
        .stdout(predicate::str::contains("archive.rar"));
}

#[test]
fn test_unreachable_host_reports_download_failure() {
    let storage = TempDir::new().expect("failed to create temp dir");
    let out = TempDir::new().expect("failed to create temp dir");

    arcpull_cmd()
        .arg("http://127.0.0.1:9/archive.zip")
        .arg("--output-dir")
        .arg(out.path())
        .arg("--storage-dir")
        .arg(storage.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Failed to download"));
}

#[test]
fn test_input_document_is_read() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let input_path = temp.path().join("input.json");
    std::fs::write(
        &input_path,
        r#"{"fileUrl": "http://127.0.0.1:9/archive.rar"}"#,
    )
    .unwrap();

    arcpull_cmd()
        .arg("--input")
        .arg(&input_path)
        .arg("--storage-dir")
        .arg(temp.path().join("storage"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("archive.rar"));
}

#[test]
fn test_malformed_input_document_rejected() {
    let temp = TempDir::new().expect("failed to create temp dir");
    let input_path = temp.path().join("input.json");
    std::fs::write(&input_path, "{not json").unwrap();

    arcpull_cmd()
        .arg("--input")
        .arg(&input_path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("failed to parse input document"));
}

#[test]
fn test_json_error_envelope() {
    arcpull_cmd()
        .arg("--json")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"status\": \"error\""));
}
