//! Integration tests for global CLI options.
//!
//! These tests verify global flags and environment variables that affect
//! all commands, including:
//! - --verbose and --quiet
//! - --data-dir and CHARGEBOOK_DATA_DIR
//! - --busy-timeout and the configured lock wait
//! - --disable-autoinit, CHARGEBOOK_DISABLE_AUTOINIT and the config key
//! - Configuration file errors

mod common;

use common::TestEnv;
use predicates::prelude::*;

const AT: &str = "2024-06-01 10:00:00";

// ============================================================================
// Verbosity
// ============================================================================

/// Committed bookings are logged at info level, which only --verbose shows.
#[test]
fn test_verbose_logs_committed_booking() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command()
        .args(["--verbose", "book", "--user", "7", "--point", "3", "--at", AT])
        .assert()
        .success()
        .stderr(predicate::str::contains("reserved for user 7"));
}

#[test]
fn test_normal_mode_logs_rejections_only() {
    let env = TestEnv::seeded(&[7], &[3]);
    env.book(7, 3, AT);

    env.command()
        .args(["book", "--user", "7", "--point", "3", "--at", AT])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("booking rejected"));
}

#[test]
fn test_quiet_suppresses_stderr() {
    let env = TestEnv::seeded(&[7], &[3]);
    env.book(7, 3, AT);

    env.command()
        .args(["--quiet", "book", "--user", "7", "--point", "3", "--at", AT])
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_log_mode_env() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command()
        .env("CHARGEBOOK_LOG_MODE", "verbose")
        .args(["book", "--user", "7", "--point", "3", "--at", AT])
        .assert()
        .success()
        .stderr(predicate::str::contains("reserved for user 7"));
}

// ============================================================================
// Data directory
// ============================================================================

#[test]
fn test_data_dir_env_var() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command_bare()
        .env("CHARGEBOOK_DATA_DIR", &env.data_dir)
        .args(["check", "--point", "3", "--at", AT])
        .assert()
        .success()
        .stdout("available\n");
}

#[test]
fn test_data_dir_flag_overrides_env() {
    let env = TestEnv::seeded(&[7], &[3]);
    let elsewhere = env.path().join("elsewhere");

    env.command_bare()
        .env("CHARGEBOOK_DATA_DIR", &elsewhere)
        .arg("--data-dir")
        .arg(&env.data_dir)
        .args(["check", "--point", "3", "--at", AT])
        .assert()
        .success();

    assert!(!elsewhere.exists());
}

/// Without --disable-autoinit the database is created on first use.
#[test]
fn test_autoinit_creates_database() {
    let env = TestEnv::new();

    env.command()
        .args(["upcoming", "--user", "7"])
        .assert()
        .success();

    assert!(env.db_path().exists());
}

#[test]
fn test_disable_autoinit_flag() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "upcoming", "--user", "7"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Data directory not found"));

    assert!(!env.db_path().exists());
}

#[test]
fn test_disable_autoinit_env() {
    let env = TestEnv::new();

    env.command()
        .env("CHARGEBOOK_DISABLE_AUTOINIT", "true")
        .args(["upcoming", "--user", "7"])
        .assert()
        .code(3);
}

#[test]
fn test_disable_autoinit_config_key() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.config_path(), "disable_autoinit: true\n").unwrap();

    env.command()
        .args(["upcoming", "--user", "7"])
        .assert()
        .code(3);
}

#[test]
fn test_disable_autoinit_with_existing_database() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command()
        .args(["--disable-autoinit", "check", "--point", "3", "--at", AT])
        .assert()
        .success();
}

// ============================================================================
// Configuration errors
// ============================================================================

#[test]
fn test_unknown_config_key_exit_code() {
    let env = TestEnv::seeded(&[7], &[3]);
    std::fs::write(env.config_path(), "port_range: 5000\n").unwrap();

    env.command()
        .args(["check", "--point", "3", "--at", AT])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_zero_lock_wait_exit_code() {
    let env = TestEnv::seeded(&[7], &[3]);
    std::fs::write(env.config_path(), "maximum_lock_wait_seconds: 0\n").unwrap();

    env.command()
        .args(["check", "--point", "3", "--at", AT])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_output_format_env_exit_code() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command()
        .env("CHARGEBOOK_OUTPUT_FORMAT", "xml")
        .args(["upcoming", "--user", "7"])
        .assert()
        .code(7);
}

#[test]
fn test_invalid_busy_timeout_exit_code() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command()
        .args(["--busy-timeout", "soon", "check", "--point", "3", "--at", AT])
        .assert()
        .code(4);
}

#[test]
fn test_zero_busy_timeout_exit_code() {
    let env = TestEnv::seeded(&[7], &[3]);

    env.command()
        .args(["--busy-timeout", "0", "book", "--user", "7", "--point", "3", "--at", AT])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("at least 1 second"));

    env.command()
        .env("CHARGEBOOK_BUSY_TIMEOUT", "0")
        .args(["check", "--point", "3", "--at", AT])
        .assert()
        .code(4);

    assert_eq!(env.booking_count(), 0);
}
