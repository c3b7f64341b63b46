//! The availability predicate.
//!
//! A point is bookable for a slot when it exists, is in the `available`
//! state, and no booking holds that exact point and slot. Called on a bare
//! connection the answer is advisory; called on an IMMEDIATE transaction it
//! is authoritative until that transaction ends.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Result, UnavailableReason};
use crate::ids::ChargingPointId;
use crate::slot::BookingSlot;

/// Outcome of an availability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// The point can be booked for the slot.
    Available,
    /// The point cannot be booked, and why.
    Unavailable(UnavailableReason),
}

impl Availability {
    /// Returns true for [`Availability::Available`].
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns the reason the point is unavailable, if it is.
    #[must_use]
    pub const fn reason(&self) -> Option<&UnavailableReason> {
        match self {
            Self::Available => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}

/// Checks whether `point` can be booked for `slot`.
///
/// A missing point is reported as unavailable, not as an error. Slots in the
/// past are not rejected.
///
/// # Errors
///
/// Returns an error only if a query fails.
///
/// # Examples
///
/// ```no_run
/// use chargebook::database::{Database, DatabaseConfig};
/// use chargebook::operations::availability::check_availability;
/// use chargebook::{BookingSlot, ChargingPointId};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
/// let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
/// let availability = check_availability(db.connection(), ChargingPointId::new(3), slot).unwrap();
/// if let Some(reason) = availability.reason() {
///     println!("cannot book: {reason}");
/// }
/// ```
pub fn check_availability(
    conn: &Connection,
    point: ChargingPointId,
    slot: BookingSlot,
) -> Result<Availability> {
    let Some(charging_point) = Database::get_charging_point(conn, point)? else {
        return Ok(Availability::Unavailable(UnavailableReason::PointNotFound));
    };

    if !charging_point.state.is_available() {
        return Ok(Availability::Unavailable(
            UnavailableReason::PointNotAvailable(charging_point.state),
        ));
    }

    if Database::count_slot_bookings(conn, point, slot)? > 0 {
        return Ok(Availability::Unavailable(UnavailableReason::SlotTaken));
    }

    Ok(Availability::Available)
}

/// Boolean form of [`check_availability`].
///
/// # Errors
///
/// Returns an error only if a query fails.
pub fn is_charging_point_available(
    conn: &Connection,
    point: ChargingPointId,
    slot: BookingSlot,
) -> Result<bool> {
    Ok(check_availability(conn, point, slot)?.is_available())
}
