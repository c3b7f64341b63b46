//! Row-level data access for bookings and charging points.
//!
//! Every helper takes a plain `&Connection`, so the same function works on
//! an open transaction (via deref) and on a bare connection. None of them
//! starts or commits a transaction.

use rusqlite::{params, Connection};

use crate::booking::{Booking, BookingDetails, StationAddress, UpcomingBooking};
use crate::charging_point::{ChargingPoint, ChargingPointState};
use crate::error::Result;
use crate::ids::{BookingId, ChargingPointId, UserId};
use crate::slot::BookingSlot;

use super::connection::Database;

const SELECT_CHARGING_POINT: &str = r"
    SELECT charging_point_id, station_id, charging_point_state, slots_num
    FROM charging_points
    WHERE charging_point_id = ?
";

const COUNT_SLOT_BOOKINGS: &str = r"
    SELECT COUNT(*) FROM bookings
    WHERE charging_point_id = ? AND booking_datetime = ?
";

const SELECT_BOOKING: &str = r"
    SELECT booking_id, user_id, charging_point_id, booking_datetime
    FROM bookings
    WHERE booking_id = ?
";

const INSERT_BOOKING: &str = r"
    INSERT INTO bookings (user_id, charging_point_id, booking_datetime)
    VALUES (?, ?, ?)
";

const UPDATE_CHARGING_POINT_STATE: &str = r"
    UPDATE charging_points
    SET charging_point_state = ?
    WHERE charging_point_id = ?
";

const DELETE_BOOKING: &str = "DELETE FROM bookings WHERE booking_id = ?";

const SELECT_BOOKING_DETAILS: &str = r"
    SELECT b.booking_id, b.user_id, b.charging_point_id, b.booking_datetime,
           cp.charging_point_state, cp.slots_num,
           s.address_street, s.address_city, s.address_municipality,
           u.name, u.email
    FROM bookings b
    JOIN charging_points cp ON b.charging_point_id = cp.charging_point_id
    JOIN stations s ON cp.station_id = s.station_id
    JOIN users u ON b.user_id = u.user_id
    WHERE b.booking_id = ?
";

const SELECT_UPCOMING_BOOKINGS: &str = r"
    SELECT b.booking_id, b.user_id, b.charging_point_id, b.booking_datetime,
           cp.charging_point_state, cp.slots_num,
           s.address_street, s.address_city
    FROM bookings b
    JOIN charging_points cp ON b.charging_point_id = cp.charging_point_id
    JOIN stations s ON cp.station_id = s.station_id
    WHERE b.user_id = ? AND b.booking_datetime >= ?
    ORDER BY b.booking_datetime, b.booking_id
";

/// Reads the first four columns of a row as a booking.
///
/// Expects: `booking_id`, `user_id`, `charging_point_id`, `booking_datetime`.
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    Ok(Booking {
        id: row.get(0)?,
        user_id: row.get(1)?,
        charging_point_id: row.get(2)?,
        slot: row.get(3)?,
    })
}

impl Database {
    /// Looks up a charging point.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chargebook::database::{Database, DatabaseConfig};
    /// use chargebook::ChargingPointId;
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
    /// let point = Database::get_charging_point(db.connection(), ChargingPointId::new(3)).unwrap();
    /// ```
    pub fn get_charging_point(
        conn: &Connection,
        id: ChargingPointId,
    ) -> Result<Option<ChargingPoint>> {
        let mut stmt = conn.prepare(SELECT_CHARGING_POINT)?;

        match stmt.query_row([id], |row| {
            Ok(ChargingPoint {
                id: row.get(0)?,
                station_id: row.get(1)?,
                state: row.get(2)?,
                slots_num: row.get(3)?,
            })
        }) {
            Ok(point) => Ok(Some(point)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Counts the bookings holding exactly this point and slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_slot_bookings(
        conn: &Connection,
        point: ChargingPointId,
        slot: BookingSlot,
    ) -> Result<i64> {
        let count = conn.query_row(COUNT_SLOT_BOOKINGS, params![point, slot], |row| row.get(0))?;
        Ok(count)
    }

    /// Looks up a booking by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_booking(conn: &Connection, id: BookingId) -> Result<Option<Booking>> {
        let mut stmt = conn.prepare(SELECT_BOOKING)?;

        match stmt.query_row([id], row_to_booking) {
            Ok(booking) => Ok(Some(booking)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Inserts a booking and returns its generated id.
    ///
    /// Performs no availability check of its own; callers run it inside a
    /// transaction that already verified the slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails, including a violation of the
    /// point/slot uniqueness constraint or a dangling user or point id.
    pub fn insert_booking(
        conn: &Connection,
        user: UserId,
        point: ChargingPointId,
        slot: BookingSlot,
    ) -> Result<BookingId> {
        conn.execute(INSERT_BOOKING, params![user, point, slot])?;
        Ok(BookingId::new(conn.last_insert_rowid()))
    }

    /// Sets the state of a charging point, returning the number of rows changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn set_charging_point_state(
        conn: &Connection,
        point: ChargingPointId,
        state: &ChargingPointState,
    ) -> Result<usize> {
        let rows_affected = conn.execute(UPDATE_CHARGING_POINT_STATE, params![state, point])?;
        Ok(rows_affected)
    }

    /// Deletes a booking, returning the number of rows removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_booking(conn: &Connection, id: BookingId) -> Result<usize> {
        let rows_affected = conn.execute(DELETE_BOOKING, [id])?;
        Ok(rows_affected)
    }

    /// Loads a booking joined with its point, station and owner.
    ///
    /// A booking whose point, station or user row is missing is reported
    /// as not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails (other than "not found").
    pub fn get_booking_details(conn: &Connection, id: BookingId) -> Result<Option<BookingDetails>> {
        let mut stmt = conn.prepare(SELECT_BOOKING_DETAILS)?;

        match stmt.query_row([id], |row| {
            Ok(BookingDetails {
                booking: row_to_booking(row)?,
                charging_point_state: row.get(4)?,
                slots_num: row.get(5)?,
                station: StationAddress {
                    street: row.get(6)?,
                    city: row.get(7)?,
                    municipality: row.get(8)?,
                },
                user_name: row.get(9)?,
                user_email: row.get(10)?,
            })
        }) {
            Ok(details) => Ok(Some(details)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Lists a user's bookings at or after `now`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row cannot be decoded.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chargebook::database::{Database, DatabaseConfig};
    /// use chargebook::{BookingSlot, UserId};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
    /// let now = BookingSlot::parse("2024-06-01 00:00:00").unwrap();
    /// let upcoming = Database::list_upcoming_bookings(db.connection(), UserId::new(7), now).unwrap();
    /// for entry in upcoming {
    ///     println!("{} at {}", entry.booking.id, entry.booking.slot);
    /// }
    /// ```
    pub fn list_upcoming_bookings(
        conn: &Connection,
        user: UserId,
        now: BookingSlot,
    ) -> Result<Vec<UpcomingBooking>> {
        let mut stmt = conn.prepare(SELECT_UPCOMING_BOOKINGS)?;

        let bookings = stmt
            .query_map(params![user, now], |row| {
                Ok(UpcomingBooking {
                    booking: row_to_booking(row)?,
                    charging_point_state: row.get(4)?,
                    slots_num: row.get(5)?,
                    station: StationAddress {
                        street: row.get(6)?,
                        city: row.get(7)?,
                        municipality: None,
                    },
                })
            })?
            .collect::<std::result::Result<Vec<_>, rusqlite::Error>>()?;

        Ok(bookings)
    }
}
