// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Integration tests for config file loading and precedence.

mod common;

use common::{swatch, write_file};
use predicates::prelude::*;

#[test]
fn test_config_sets_format_and_marker() {
    let config = write_file(".toml", "format = \"json\"\nmarker = \"*\"\n");
    let output = swatch()
        .arg("--config")
        .arg(config.path())
        .arg("scan")
        .write_stdin("\\e[31m")
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["hex"], "#ff0000");

    swatch()
        .arg("--config")
        .arg(config.path())
        .args(["--format", "text", "decorate"])
        .write_stdin("\\e[31m")
        .assert()
        .success()
        .stdout(predicate::str::contains("m*\u{1b}[0m"));
}

#[test]
fn test_config_from_environment() {
    let config = write_file(".json", r#"{ "prefixes": ["octal"] }"#);
    let output = swatch()
        .env("ANSI_SWATCH_CONFIG", config.path())
        .args(["--format", "json", "scan"])
        .write_stdin("\\033[31m \\e[32m")
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["prefix"], "octal");
}

#[test]
fn test_cli_prefix_overrides_config() {
    let config = write_file(".toml", "prefixes = [\"octal\"]\n");
    let output = swatch()
        .arg("--config")
        .arg(config.path())
        .args(["--prefix", "short", "--format", "json", "scan"])
        .write_stdin("\\033[31m \\e[32m")
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["prefix"], "short");
}

#[test]
fn test_config_hides_unresolved() {
    let config = write_file(".toml", "show_unresolved = false\n");
    swatch()
        .arg("--config")
        .arg(config.path())
        .arg("scan")
        .write_stdin("\\033[1;31mERROR\\033[0m")
        .assert()
        .success()
        .stdout(predicate::str::contains("Reset").not());
}

#[test]
fn test_unknown_config_field_rejected() {
    let config = write_file(".toml", "colour = \"auto\"\n");
    swatch()
        .arg("--config")
        .arg(config.path())
        .arg("palette")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse TOML"))
        .stderr(predicate::str::contains("colour"));
}

#[test]
fn test_unknown_config_prefix_rejected() {
    let config = write_file(".toml", "prefixes = [\"unicode\"]\n");
    swatch()
        .arg("--config")
        .arg(config.path())
        .arg("palette")
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Failed to parse TOML"));
}

#[test]
fn test_empty_prefix_list_rejected() {
    let config = write_file(".toml", "prefixes = []\n");
    swatch()
        .arg("--config")
        .arg(config.path())
        .arg("palette")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_missing_config_file() {
    swatch()
        .args(["--config", "/nonexistent/swatch.toml", "palette"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read config file"));
}

#[test]
fn test_verbose_names_loaded_config() {
    let config = write_file(".toml", "");
    swatch()
        .arg("--config")
        .arg(config.path())
        .args(["-v", "palette"])
        .assert()
        .success()
        .stderr(predicate::str::contains("debug: loaded config from"));
}
