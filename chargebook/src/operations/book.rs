//! Booking operation planning and execution.
//!
//! Booking is a single IMMEDIATE transaction: the availability check runs
//! under the write lock, the plan inserts the booking and flips the point to
//! `reserved`, and both changes commit together or not at all.

use rusqlite::Connection;

use crate::charging_point::ChargingPointState;
use crate::database::{map_lock_error, Database};
use crate::error::BookingFailure;
use crate::ids::{ChargingPointId, UserId};
use crate::slot::BookingSlot;

use super::availability::{check_availability, Availability};
use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::{OperationPlan, PlanAction};

/// Options for a booking operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookOptions {
    /// Who the booking is for.
    pub user: UserId,
    /// The point to reserve.
    pub point: ChargingPointId,
    /// The slot to reserve.
    pub slot: BookingSlot,
}

impl BookOptions {
    /// Creates booking options.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargebook::operations::BookOptions;
    /// use chargebook::{BookingSlot, ChargingPointId, UserId};
    ///
    /// let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
    /// let options = BookOptions::new(UserId::new(7), ChargingPointId::new(3), slot);
    /// assert_eq!(options.point.value(), 3);
    /// ```
    #[must_use]
    pub const fn new(user: UserId, point: ChargingPointId, slot: BookingSlot) -> Self {
        Self { user, point, slot }
    }
}

/// A booking plan generator.
pub struct BookPlan {
    options: BookOptions,
}

impl BookPlan {
    /// Creates a new booking plan with the given options.
    #[must_use]
    pub const fn new(options: BookOptions) -> Self {
        Self { options }
    }

    /// Builds the plan for this booking request.
    ///
    /// Runs the availability check on `conn` and, if the point is bookable,
    /// returns a plan that inserts the booking and reserves the point. It
    /// does NOT modify the database. To be race-free `conn` must be an
    /// IMMEDIATE transaction that the plan is then executed and committed on.
    ///
    /// # Errors
    ///
    /// Returns [`BookingFailure::Unavailable`] if the point is missing, not
    /// available, or the slot is taken, and
    /// [`BookingFailure::TransactionError`] if a query fails.
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan, BookingFailure> {
        let BookOptions { user, point, slot } = self.options;

        if let Availability::Unavailable(reason) = check_availability(conn, point, slot)? {
            log::debug!("charging point {point} at {slot} unavailable: {reason}");
            return Err(BookingFailure::Unavailable(reason));
        }

        Ok(
            OperationPlan::new(format!("Book charging point {point} at {slot} for user {user}"))
                .add_action(PlanAction::InsertBooking { user, point, slot })
                .add_action(PlanAction::SetPointState {
                    point,
                    state: ChargingPointState::Reserved,
                }),
        )
    }
}

/// Runs a booking as one IMMEDIATE transaction.
///
/// On success the booking and the state change are committed and the
/// result carries the new booking id. In dry-run mode the plan is built
/// under the lock and reported, then the transaction is rolled back.
///
/// # Errors
///
/// Returns [`BookingFailure::Unavailable`] for a business conflict and
/// [`BookingFailure::TransactionError`] for any storage failure, including
/// a lock timeout. Nothing is committed in either case.
///
/// # Examples
///
/// ```no_run
/// use chargebook::database::{Database, DatabaseConfig};
/// use chargebook::operations::{execute_book, BookOptions};
/// use chargebook::{BookingSlot, ChargingPointId, UserId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
/// let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
/// let options = BookOptions::new(UserId::new(7), ChargingPointId::new(3), slot);
///
/// match execute_book(&mut db, &options, false) {
///     Ok(result) => println!("booked {:?}", result.booking_id),
///     Err(failure) => eprintln!("{failure}"),
/// }
/// ```
pub fn execute_book(
    db: &mut Database,
    options: &BookOptions,
    dry_run: bool,
) -> Result<ExecutionResult, BookingFailure> {
    let lock_wait = db.lock_wait_seconds();
    let tx = db.begin_transaction()?;

    let plan = BookPlan::new(options.clone()).build_plan(&tx)?;

    let mut executor = PlanExecutor::new(&tx);
    if dry_run {
        executor = executor.dry_run();
    }
    let result = executor.execute(&plan)?;

    if dry_run {
        tx.rollback()?;
    } else {
        tx.commit().map_err(|e| map_lock_error(e, lock_wait))?;
    }

    Ok(result)
}
