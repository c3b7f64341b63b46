//! The reservation engine: the booking API used by front ends.
//!
//! [`ReservationEngine`] owns one [`Database`] connection. Concurrent callers
//! (threads or processes) each open their own engine on the same database
//! file; every booking and cancellation runs as an IMMEDIATE transaction, so
//! for any charging point the committed transitions are totally ordered.

use crate::booking::{BookingDetails, UpcomingBooking};
use crate::database::{Database, DatabaseConfig};
use crate::error::{BookingFailure, Error, Result};
use crate::ids::{BookingId, ChargingPointId, UserId};
use crate::operations::availability::{self, Availability};
use crate::operations::{execute_book, execute_cancel, query, BookOptions, CancelOptions};
use crate::slot::BookingSlot;

/// Books and cancels charging point slots.
///
/// # Examples
///
/// ```no_run
/// use chargebook::database::DatabaseConfig;
/// use chargebook::{BookingSlot, ChargingPointId, ReservationEngine, UserId};
///
/// let mut engine = ReservationEngine::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
/// let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
///
/// match engine.create_booking(UserId::new(7), ChargingPointId::new(3), slot) {
///     Ok(id) => println!("booking {id} confirmed"),
///     Err(failure) if failure.is_unavailable() => println!("slot not available"),
///     Err(failure) => eprintln!("booking failed: {failure}"),
/// }
/// ```
#[derive(Debug)]
pub struct ReservationEngine {
    db: Database,
}

impl ReservationEngine {
    /// Creates an engine on an open database.
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Opens the database and creates an engine on it.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        Ok(Self::new(Database::open(config)?))
    }

    /// Returns the underlying database.
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }

    /// Returns whether `point` can currently be booked for `slot`.
    ///
    /// The answer is advisory: it takes no lock, so a concurrent booking may
    /// invalidate it immediately. Storage errors are logged and reported as
    /// unavailable.
    #[must_use]
    pub fn is_charging_point_available(&self, point: ChargingPointId, slot: BookingSlot) -> bool {
        match availability::is_charging_point_available(self.db.connection(), point, slot) {
            Ok(available) => available,
            Err(e) => {
                log::error!("availability check for charging point {point} failed: {e}");
                false
            }
        }
    }

    /// Like [`Self::is_charging_point_available`], but names the reason and
    /// surfaces storage errors.
    ///
    /// # Errors
    ///
    /// Returns an error if a query fails.
    pub fn check_availability(
        &self,
        point: ChargingPointId,
        slot: BookingSlot,
    ) -> Result<Availability> {
        availability::check_availability(self.db.connection(), point, slot)
    }

    /// Reserves `point` at `slot` for `user`.
    ///
    /// Runs as a single transaction: the point must exist and be
    /// `available`, and no booking may hold the exact slot. On success the
    /// booking is inserted and the point becomes `reserved`; on failure
    /// nothing changes. Of two concurrent calls for the same point at most
    /// one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`BookingFailure::Unavailable`] for a business conflict and
    /// [`BookingFailure::TransactionError`] for a storage failure or lock
    /// timeout.
    pub fn create_booking(
        &mut self,
        user: UserId,
        point: ChargingPointId,
        slot: BookingSlot,
    ) -> std::result::Result<BookingId, BookingFailure> {
        let options = BookOptions::new(user, point, slot);

        let outcome = execute_book(&mut self.db, &options, false).and_then(|result| {
            result.booking_id.ok_or_else(|| {
                BookingFailure::TransactionError(Error::NotFound {
                    resource: "id of the inserted booking".into(),
                })
            })
        });

        match &outcome {
            Ok(id) => {
                log::info!("booking {id}: charging point {point} at {slot} reserved for user {user}");
            }
            Err(BookingFailure::Unavailable(reason)) => {
                log::warn!("booking rejected for charging point {point} at {slot}: {reason}");
            }
            Err(BookingFailure::TransactionError(e)) => {
                log::error!("booking transaction for charging point {point} failed: {e}");
            }
        }

        outcome
    }

    /// Cancels `booking` on behalf of `user`.
    ///
    /// Returns true if the booking existed, belonged to `user`, and was
    /// removed together with returning its point to `available`. A missing
    /// booking, someone else's booking, and a storage failure all return
    /// false and leave storage unchanged.
    pub fn cancel_booking(&mut self, booking: BookingId, user: UserId) -> bool {
        match self.try_cancel_booking(booking, user) {
            Ok(cancelled) => cancelled,
            Err(e) => {
                log::error!("cancelling booking {booking} failed: {e}");
                false
            }
        }
    }

    /// Like [`Self::cancel_booking`], but surfaces storage errors.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails or times out waiting for
    /// the lock; nothing is committed in that case.
    pub fn try_cancel_booking(&mut self, booking: BookingId, user: UserId) -> Result<bool> {
        let result = execute_cancel(&mut self.db, CancelOptions::new(booking, user), false)?;

        let cancelled = result.booking_id.is_some();
        if cancelled {
            log::info!("booking {booking} cancelled by user {user}");
        } else {
            log::warn!("cancellation of booking {booking} by user {user} refused");
        }
        Ok(cancelled)
    }

    /// Loads a booking with its point, station and owner.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_booking_details(&self, booking: BookingId) -> Result<Option<BookingDetails>> {
        query::booking_details(self.db.connection(), booking)
    }

    /// Lists `user`'s bookings from now on, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_upcoming_bookings(&self, user: UserId) -> Result<Vec<UpcomingBooking>> {
        query::upcoming_bookings(self.db.connection(), user)
    }

    /// Lists `user`'s bookings with a slot at or after `now`, earliest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_user_upcoming_bookings_at(
        &self,
        user: UserId,
        now: BookingSlot,
    ) -> Result<Vec<UpcomingBooking>> {
        query::upcoming_bookings_at(self.db.connection(), user, now)
    }
}
