//! Cancellation planning and execution.
//!
//! Only the owner may cancel a booking. A missing booking and a booking that
//! belongs to someone else produce the same empty plan, so callers cannot
//! probe for other users' booking ids.

use rusqlite::Connection;

use crate::charging_point::ChargingPointState;
use crate::database::{map_lock_error, Database};
use crate::error::Result;
use crate::ids::{BookingId, UserId};

use super::executor::{ExecutionResult, PlanExecutor};
use super::plan::{OperationPlan, PlanAction};

/// Options for a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelOptions {
    /// The booking to cancel.
    pub booking: BookingId,
    /// The user asking for the cancellation.
    pub user: UserId,
}

impl CancelOptions {
    /// Creates cancellation options.
    #[must_use]
    pub const fn new(booking: BookingId, user: UserId) -> Self {
        Self { booking, user }
    }
}

/// A cancellation plan generator.
pub struct CancelPlan {
    options: CancelOptions,
}

impl CancelPlan {
    /// Creates a new cancellation plan with the given options.
    #[must_use]
    pub const fn new(options: CancelOptions) -> Self {
        Self { options }
    }

    /// Builds the plan for this cancellation.
    ///
    /// If the booking exists and is owned by the requesting user, the plan
    /// deletes it and returns its point to `available`. Otherwise the plan
    /// is empty and carries a warning. It does NOT modify the database.
    ///
    /// # Errors
    ///
    /// Returns an error if the booking lookup fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chargebook::database::{Database, DatabaseConfig};
    /// use chargebook::operations::{CancelOptions, CancelPlan};
    /// use chargebook::{BookingId, UserId};
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
    /// let options = CancelOptions::new(BookingId::new(12), UserId::new(7));
    /// let plan = CancelPlan::new(options).build_plan(db.connection()).unwrap();
    /// if plan.is_empty() {
    ///     println!("nothing to cancel");
    /// }
    /// ```
    pub fn build_plan(&self, conn: &Connection) -> Result<OperationPlan> {
        let CancelOptions { booking, user } = self.options;
        let plan = OperationPlan::new(format!("Cancel booking {booking} for user {user}"));

        match Database::get_booking(conn, booking)? {
            Some(found) if found.is_owned_by(user) => Ok(plan
                .add_action(PlanAction::DeleteBooking(booking))
                .add_action(PlanAction::SetPointState {
                    point: found.charging_point_id,
                    state: ChargingPointState::Available,
                })),
            _ => {
                log::debug!("booking {booking} not found for user {user}");
                Ok(plan.add_warning(format!("No booking {booking} found for user {user}")))
            }
        }
    }
}

/// Runs a cancellation as one IMMEDIATE transaction.
///
/// The result's `booking_id` is set when a booking was (or, in dry-run mode,
/// would be) cancelled, and `None` when there was nothing to cancel.
///
/// # Errors
///
/// Returns an error if the transaction cannot be started or committed
/// (including a lock timeout) or any step fails. Nothing is committed in
/// that case.
pub fn execute_cancel(
    db: &mut Database,
    options: CancelOptions,
    dry_run: bool,
) -> Result<ExecutionResult> {
    let lock_wait = db.lock_wait_seconds();
    let tx = db.begin_transaction()?;

    let plan = CancelPlan::new(options).build_plan(&tx)?;

    let mut executor = PlanExecutor::new(&tx);
    if dry_run {
        executor = executor.dry_run();
    }
    let result = executor.execute(&plan)?;

    if dry_run || plan.is_empty() {
        tx.rollback()?;
    } else {
        tx.commit().map_err(|e| map_lock_error(e, lock_wait))?;
    }

    Ok(result)
}
