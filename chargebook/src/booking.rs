//! Booking records and the denormalized views returned by queries.
//!
//! A [`Booking`] binds a user, a charging point and a slot. It is created by
//! the booking transaction and destroyed by cancellation; it is never updated
//! in place, so the type has no setters.

use serde::Serialize;

use crate::charging_point::ChargingPointState;
use crate::ids::{BookingId, ChargingPointId, UserId};
use crate::slot::BookingSlot;

/// A booking row.
///
/// # Examples
///
/// ```
/// use chargebook::{Booking, BookingId, BookingSlot, ChargingPointId, UserId};
///
/// let booking = Booking {
///     id: BookingId::new(1),
///     user_id: UserId::new(7),
///     charging_point_id: ChargingPointId::new(3),
///     slot: "2024-06-01 10:00:00".parse::<BookingSlot>().unwrap(),
/// };
/// assert!(booking.is_owned_by(UserId::new(7)));
/// assert!(!booking.is_owned_by(UserId::new(8)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Booking {
    /// Storage-assigned identifier.
    #[serde(rename = "booking_id")]
    pub id: BookingId,
    /// Owner of the booking.
    pub user_id: UserId,
    /// Reserved charging point.
    pub charging_point_id: ChargingPointId,
    /// Reserved slot.
    #[serde(rename = "booking_datetime")]
    pub slot: BookingSlot,
}

impl Booking {
    /// Returns true if `user` owns this booking.
    #[must_use]
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == user
    }
}

/// Station address fields joined into query results.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct StationAddress {
    /// Street line.
    pub street: Option<String>,
    /// City.
    pub city: Option<String>,
    /// Municipality. Only filled in by the booking details query.
    pub municipality: Option<String>,
}

impl std::fmt::Display for StationAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<&str> = [&self.street, &self.city, &self.municipality]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
            .collect();
        if parts.is_empty() {
            f.write_str("-")
        } else {
            f.write_str(&parts.join(", "))
        }
    }
}

/// Everything known about one booking, joined across point, station and user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDetails {
    /// The booking itself.
    #[serde(flatten)]
    pub booking: Booking,
    /// Current state of the booked point.
    pub charging_point_state: ChargingPointState,
    /// Slot count of the booked point.
    pub slots_num: i64,
    /// Where the point is.
    pub station: StationAddress,
    /// Owner's display name.
    pub user_name: String,
    /// Owner's email address.
    pub user_email: String,
}

/// One entry of a user's upcoming bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBooking {
    /// The booking itself.
    #[serde(flatten)]
    pub booking: Booking,
    /// Current state of the booked point.
    pub charging_point_state: ChargingPointState,
    /// Slot count of the booked point.
    pub slots_num: i64,
    /// Street and city of the station.
    pub station: StationAddress,
}
