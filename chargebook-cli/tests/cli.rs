//! Integration tests for the chargebook CLI.
//!
//! These tests verify that the CLI binary behaves correctly, including
//! argument parsing, help text, and version output.

use assert_cmd::Command;
use predicates::prelude::*;

fn chargebook() -> Command {
    Command::cargo_bin("chargebook").expect("Failed to find chargebook binary")
}

/// With subcommands required, no arguments should fail and show usage.
#[test]
fn test_cli_no_arguments() {
    chargebook()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn test_cli_version_flag() {
    chargebook()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("chargebook"))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_help_flag() {
    chargebook()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Book EV charging-point slots"));
}

#[test]
fn test_cli_help_lists_commands() {
    let assert = chargebook().arg("--help").assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for command in ["init", "book", "cancel", "check", "show", "upcoming", "completions"] {
        assert!(stdout.contains(command), "help should list {command}");
    }
}

#[test]
fn test_cli_invalid_subcommand() {
    chargebook()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_book_requires_arguments() {
    chargebook()
        .args(["book", "--user", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--point"));
}

#[test]
fn test_completions_bash() {
    chargebook()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("chargebook"));
}
