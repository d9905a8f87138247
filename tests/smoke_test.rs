//! Smoke tests for the Mindmap CLI.
//!
//! These tests verify basic CLI functionality:
//! - `mindmap --version` outputs version info
//! - `mindmap --help` outputs help text
//! - unknown commands fail

use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the mindmap binary.
fn mindmap() -> Command {
    Command::new(env!("CARGO_BIN_EXE_mindmap"))
}

#[test]
fn test_version_flag() {
    mindmap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("mindmap"))
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_help_flag() {
    mindmap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("layout"));
}

#[test]
fn test_render_help() {
    mindmap()
        .args(["render", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--radius"))
        .stdout(predicate::str::contains("--child-size"))
        .stdout(predicate::str::contains("--output"));
}

#[test]
fn test_no_args_fails() {
    mindmap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_invalid_command() {
    mindmap()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}
