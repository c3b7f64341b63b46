//! Shared test utilities for database unit tests.
//!
//! The engine never creates users, stations or charging points, so tests
//! seed them with plain SQL.

use std::path::Path;

use rusqlite::{params, Connection};
use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::ids::{ChargingPointId, UserId};

/// Creates a temporary test database that will be cleaned up automatically.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let db = create_test_database_at(&dir.path().join("test.db"));

    // Keep the directory alive for the lifetime of the test process
    std::mem::forget(dir);

    db
}

/// Opens (creating if needed) a test database at `path`.
///
/// # Panics
///
/// Panics if the database cannot be opened.
#[must_use]
pub fn create_test_database_at(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Inserts a user.
///
/// # Panics
///
/// Panics if the insert fails.
pub fn seed_user(conn: &Connection, id: i64, name: &str) -> UserId {
    conn.execute(
        "INSERT INTO users (user_id, name, email) VALUES (?1, ?2, ?3)",
        params![id, name, format!("{name}@example.com")],
    )
    .unwrap();
    UserId::new(id)
}

/// Inserts a station and one charging point on it in the given state.
///
/// # Panics
///
/// Panics if an insert fails.
pub fn seed_point(conn: &Connection, id: i64, state: &str) -> ChargingPointId {
    conn.execute(
        "INSERT OR IGNORE INTO stations (station_id, address_street, address_city, address_municipality)
         VALUES (?1, 'Main St 1', 'Springfield', 'Shelbyville')",
        params![id],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO charging_points (charging_point_id, station_id, charging_point_state, slots_num)
         VALUES (?1, ?1, ?2, 2)",
        params![id, state],
    )
    .unwrap();
    ChargingPointId::new(id)
}

/// Reads the stored state text of a charging point.
///
/// # Panics
///
/// Panics if the point does not exist.
#[must_use]
pub fn point_state(conn: &Connection, id: ChargingPointId) -> String {
    conn.query_row(
        "SELECT charging_point_state FROM charging_points WHERE charging_point_id = ?1",
        [id],
        |row| row.get(0),
    )
    .unwrap()
}

/// Counts every booking row.
///
/// # Panics
///
/// Panics if the query fails.
#[must_use]
pub fn booking_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
        .unwrap()
}
