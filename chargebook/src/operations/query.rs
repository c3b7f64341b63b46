//! Read-only booking queries.

use chrono::Local;
use rusqlite::Connection;

use crate::booking::{BookingDetails, UpcomingBooking};
use crate::database::Database;
use crate::error::Result;
use crate::ids::{BookingId, UserId};
use crate::slot::BookingSlot;

/// Loads one booking with its point, station and owner.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn booking_details(conn: &Connection, booking: BookingId) -> Result<Option<BookingDetails>> {
    Database::get_booking_details(conn, booking)
}

/// Lists the user's bookings from the current local time onwards.
///
/// Slots are naive local timestamps, so "now" is the local wall clock
/// truncated to whole seconds.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn upcoming_bookings(conn: &Connection, user: UserId) -> Result<Vec<UpcomingBooking>> {
    upcoming_bookings_at(conn, user, BookingSlot::new(Local::now().naive_local()))
}

/// Lists the user's bookings with a slot at or after `now`, earliest first.
///
/// # Errors
///
/// Returns an error if the query fails.
///
/// # Examples
///
/// ```no_run
/// use chargebook::database::{Database, DatabaseConfig};
/// use chargebook::operations::query::upcoming_bookings_at;
/// use chargebook::{BookingSlot, UserId};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
/// let now = BookingSlot::parse("2024-06-01 08:00:00").unwrap();
/// let upcoming = upcoming_bookings_at(db.connection(), UserId::new(7), now).unwrap();
/// ```
pub fn upcoming_bookings_at(
    conn: &Connection,
    user: UserId,
    now: BookingSlot,
) -> Result<Vec<UpcomingBooking>> {
    Database::list_upcoming_bookings(conn, user, now)
}
