//! Shared database test utilities.

use std::path::{Path, PathBuf};

use chargebook::database::{Database, DatabaseConfig};
use chargebook::ChargingPointId;
use rusqlite::{params, Connection};

/// Creates a database file in a fresh temporary directory.
///
/// Returns the directory guard and the database path; the directory lives
/// as long as the guard.
#[allow(dead_code)]
pub fn create_database_file() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chargebook.db");
    Database::open(DatabaseConfig::new(&path)).unwrap();
    (dir, path)
}

/// Opens another connection to an existing database file.
#[allow(dead_code)]
pub fn open(path: &Path) -> Database {
    Database::open(DatabaseConfig::new(path)).unwrap()
}

/// Inserts a user row.
#[allow(dead_code)]
pub fn insert_user(conn: &Connection, id: i64, name: &str) {
    conn.execute(
        "INSERT INTO users (user_id, name, email) VALUES (?1, ?2, ?3)",
        params![id, name, format!("{name}@example.com")],
    )
    .unwrap();
}

/// Inserts a station and a charging point with the same id.
#[allow(dead_code)]
pub fn insert_point(conn: &Connection, id: i64, state: &str) {
    conn.execute(
        "INSERT INTO stations (station_id, address_street, address_city, address_municipality)
         VALUES (?1, ?2, 'Springfield', 'Springfield County')",
        params![id, format!("Charger Lane {id}")],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO charging_points (charging_point_id, station_id, charging_point_state, slots_num)
         VALUES (?1, ?1, ?2, 1)",
        params![id, state],
    )
    .unwrap();
}

/// Reads the stored state text of a charging point.
#[allow(dead_code)]
pub fn point_state(conn: &Connection, point: ChargingPointId) -> String {
    conn.query_row(
        "SELECT charging_point_state FROM charging_points WHERE charging_point_id = ?1",
        [point.value()],
        |row| row.get(0),
    )
    .unwrap()
}

/// Counts bookings for a point and exact slot text.
#[allow(dead_code)]
pub fn bookings_for(conn: &Connection, point: ChargingPointId, slot: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM bookings WHERE charging_point_id = ?1 AND booking_datetime = ?2",
        params![point.value(), slot],
        |row| row.get(0),
    )
    .unwrap()
}

/// Counts all bookings.
#[allow(dead_code)]
pub fn total_bookings(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM bookings", [], |row| row.get(0))
        .unwrap()
}
