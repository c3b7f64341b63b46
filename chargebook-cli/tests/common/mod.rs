//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builder helpers for common patterns
//! - Seeding users and charging points with plain SQL, since the CLI
//!   never creates them

use assert_cmd::Command;
use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test.
const CHARGEBOOK_ENV: [&str; 6] = [
    "CHARGEBOOK_DATA_DIR",
    "CHARGEBOOK_BUSY_TIMEOUT",
    "CHARGEBOOK_DISABLE_AUTOINIT",
    "CHARGEBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "CHARGEBOOK_OUTPUT_FORMAT",
    "CHARGEBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the chargebook data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The data directory path is not created yet; `init` or auto-init
    /// creates it.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("chargebook-data");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Create an initialized environment with the given users and
    /// available charging points.
    pub fn seeded(users: &[i64], points: &[i64]) -> Self {
        let env = Self::new();
        env.init();
        let conn = env.connect();
        for &user in users {
            insert_user(&conn, user);
        }
        for &point in points {
            insert_point(&conn, point, "available");
        }
        env
    }

    /// Get a bare command builder with no data directory flag.
    ///
    /// `CHARGEBOOK_*` variables from the host are removed so tests see only
    /// what they set themselves.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("chargebook").expect("Failed to find chargebook binary");
        for var in CHARGEBOOK_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path of the database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join("chargebook.db")
    }

    /// Path of the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.yaml")
    }

    /// Run `chargebook init`.
    pub fn init(&self) {
        self.command().arg("init").assert().success();
    }

    /// Open a direct connection to the database.
    pub fn connect(&self) -> Connection {
        Connection::open(self.db_path()).expect("Failed to open database")
    }

    /// Book and return the new booking id.
    ///
    /// # Panics
    /// Panics if the book command fails or doesn't print an id.
    pub fn book(&self, user: i64, point: i64, at: &str) -> i64 {
        let output = self
            .command()
            .args(["book", "--user", &user.to_string(), "--point", &point.to_string(), "--at", at])
            .output()
            .expect("Failed to run book command");

        assert!(
            output.status.success(),
            "Book failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        parse_id(&String::from_utf8(output.stdout).expect("Invalid UTF-8 in output"))
    }

    /// Stored state of a charging point.
    pub fn point_state(&self, point: i64) -> String {
        self.connect()
            .query_row(
                "SELECT charging_point_state FROM charging_points WHERE charging_point_id = ?1",
                [point],
                |row| row.get(0),
            )
            .expect("Charging point not found")
    }

    /// Number of booking rows.
    pub fn booking_count(&self) -> i64 {
        self.connect()
            .query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
            .expect("Failed to count bookings")
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert a user named `user{id}`.
#[allow(dead_code)]
pub fn insert_user(conn: &Connection, id: i64) {
    conn.execute(
        "INSERT INTO users (user_id, name, email) VALUES (?1, ?2, ?3)",
        params![id, format!("user{id}"), format!("user{id}@example.com")],
    )
    .expect("Failed to insert user");
}

/// Insert a station and a charging point with the same id.
#[allow(dead_code)]
pub fn insert_point(conn: &Connection, id: i64, state: &str) {
    conn.execute(
        "INSERT INTO stations (station_id, address_street, address_city, address_municipality)
         VALUES (?1, ?2, 'Springfield', 'Springfield County')",
        params![id, format!("{id} Volt Avenue")],
    )
    .expect("Failed to insert station");
    conn.execute(
        "INSERT INTO charging_points (charging_point_id, station_id, charging_point_state, slots_num)
         VALUES (?1, ?1, ?2, 2)",
        params![id, state],
    )
    .expect("Failed to insert charging point");
}

/// Parse a booking id from command output.
#[allow(dead_code)]
pub fn parse_id(output: &str) -> i64 {
    output
        .trim()
        .parse()
        .expect("Output is not a valid booking id")
}
