//! Database layer for bookings and charging point state.
//!
//! This module provides a SQLite-based storage layer: connection management,
//! schema versioning, IMMEDIATE transactions and the row-level helpers the
//! booking operations are built from.
//!
//! # Examples
//!
//! ```no_run
//! use chargebook::database::{Database, DatabaseConfig};
//! use chargebook::{BookingSlot, ChargingPointId, UserId};
//!
//! let config = DatabaseConfig::new("/tmp/chargebook.db");
//! let mut db = Database::open(config).unwrap();
//!
//! let tx = db.begin_transaction().unwrap();
//! let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
//! let id = Database::insert_booking(&tx, UserId::new(7), ChargingPointId::new(3), slot).unwrap();
//! tx.commit().unwrap();
//! println!("booked {id}");
//! ```

mod config;
mod connection;
pub mod migrations;
mod operations;
mod schema;
#[cfg(test)]
pub(crate) mod test_util;
mod transaction;

pub use config::{
    default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig, DATABASE_FILE_NAME,
};
pub use connection::Database;
pub use transaction::map_lock_error;

pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
