//! Database schema definitions and SQL constants.
//!
//! Users, stations and charging points are owned by other subsystems that
//! share this database; the engine only reads them, apart from flipping
//! `charging_point_state` between `available` and `reserved`.

/// Current schema version for the database.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the users table.
pub const CREATE_USERS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        user_id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT NOT NULL
    )";

/// SQL statement to create the stations table.
pub const CREATE_STATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS stations (
        station_id INTEGER PRIMARY KEY,
        address_street TEXT,
        address_city TEXT,
        address_municipality TEXT
    )";

/// SQL statement to create the charging points table.
pub const CREATE_CHARGING_POINTS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS charging_points (
        charging_point_id INTEGER PRIMARY KEY,
        station_id INTEGER NOT NULL REFERENCES stations(station_id),
        charging_point_state TEXT NOT NULL DEFAULT 'available',
        slots_num INTEGER NOT NULL DEFAULT 1
    )";

/// SQL statement to create the bookings table.
///
/// `AUTOINCREMENT` keeps booking ids from being reused after a cancellation.
/// The UNIQUE constraint backs up the exact-slot conflict rule; the booking
/// transaction checks the slot itself before inserting.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        booking_id INTEGER PRIMARY KEY AUTOINCREMENT,
        user_id INTEGER NOT NULL REFERENCES users(user_id),
        charging_point_id INTEGER NOT NULL REFERENCES charging_points(charging_point_id),
        booking_datetime TEXT NOT NULL,
        UNIQUE (charging_point_id, booking_datetime)
    )";

/// Index for per-user listings.
pub const CREATE_BOOKINGS_USER_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_user ON bookings(user_id, booking_datetime)";

/// Index for time-window scans.
pub const CREATE_BOOKINGS_DATETIME_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_datetime ON bookings(booking_datetime)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
