//! Integration tests for `atelier config`.
//!
//! Each test points `ATELIER_CONFIG` at its own temp file so runs are
//! hermetic and order-independent.

#![allow(clippy::expect_used)]

use assert_cmd::Command;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

fn atelier(config: &std::path::Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("atelier"));
    cmd.env("NO_COLOR", "1");
    cmd.env("ATELIER_CONFIG", config);
    cmd
}

#[test]
#[serial]
fn test_config_get_returns_default_without_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.yaml");

    atelier(&config)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("human"));
}

#[test]
#[serial]
fn test_config_set_then_get_roundtrip() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.yaml");

    atelier(&config)
        .args(["config", "set", "output.format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set output.format = json"));

    atelier(&config)
        .args(["config", "get", "output.format"])
        .assert()
        .success()
        .stdout(predicate::str::contains("json"));
}

#[test]
#[serial]
fn test_config_set_writes_the_file() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.yaml");

    atelier(&config)
        .args(["config", "set", "api.base_url", "https://agents.example.com/api"])
        .assert()
        .success();

    let content = std::fs::read_to_string(&config).expect("config written");
    assert!(content.contains("agents.example.com"), "got: {content}");
}

#[test]
#[serial]
fn test_config_set_rejects_unknown_key() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.yaml");

    atelier(&config)
        .args(["config", "set", "theme.mode", "dark"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown setting"));
    assert!(!config.exists(), "invalid set must not create the file");
}

#[test]
#[serial]
fn test_config_set_rejects_invalid_value() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.yaml");

    atelier(&config)
        .args(["config", "set", "output.format", "tsv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value"));
}

#[test]
#[serial]
fn test_config_list_shows_all_keys() {
    let dir = TempDir::new().expect("tempdir");
    let config = dir.path().join("config.yaml");

    atelier(&config)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.base_url"))
        .stdout(predicate::str::contains("output.format"));
}
