//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans and
//! applies them to a connection, normally the transaction the plan was
//! built in.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::ids::BookingId;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The booking created or deleted by the plan, if any.
    ///
    /// A dry run cannot know the id a new booking would receive, so this is
    /// `None` for a dry-run booking.
    pub booking_id: Option<BookingId>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, booking_id: Option<BookingId>) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            booking_id,
        }
    }
}

/// Executes operation plans against a connection.
///
/// The executor runs in normal mode (applying changes) or dry-run mode
/// (reporting without changes). It never opens or commits a transaction;
/// the caller owns the transaction boundary.
///
/// # Examples
///
/// ```no_run
/// use chargebook::operations::{BookOptions, BookPlan, PlanExecutor};
/// use chargebook::database::{Database, DatabaseConfig};
/// use chargebook::{BookingSlot, ChargingPointId, UserId};
///
/// let mut db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
/// let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
/// let options = BookOptions::new(UserId::new(7), ChargingPointId::new(3), slot);
///
/// let tx = db.begin_transaction().unwrap();
/// let plan = BookPlan::new(options).build_plan(&tx).unwrap();
/// let result = PlanExecutor::new(&tx).execute(&plan).unwrap();
/// tx.commit().unwrap();
/// println!("booked {:?}", result.booking_id);
/// ```
pub struct PlanExecutor<'a> {
    conn: &'a Connection,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(conn: &'a Connection) -> Self {
        Self {
            conn,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// In dry-run mode nothing is written. Otherwise every action is applied
    /// in order; the first failure stops execution and is returned, leaving
    /// the rollback to the caller's transaction.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails, or if an update or delete that
    /// the plan relies on matches no row.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            return Ok(ExecutionResult::new(
                plan,
                true,
                Self::deleted_booking(plan),
            ));
        }

        let mut booking_id = None;
        for action in &plan.actions {
            log::debug!("executing: {}", action.description());
            if let Some(id) = self.execute_action(action)? {
                booking_id = Some(id);
            }
        }

        Ok(ExecutionResult::new(plan, false, booking_id))
    }

    /// Executes a single action, returning the booking it touched.
    fn execute_action(&self, action: &PlanAction) -> Result<Option<BookingId>> {
        match action {
            PlanAction::InsertBooking { user, point, slot } => {
                let id = Database::insert_booking(self.conn, *user, *point, *slot)?;
                Ok(Some(id))
            }
            PlanAction::DeleteBooking(id) => {
                if Database::delete_booking(self.conn, *id)? == 0 {
                    return Err(Error::NotFound {
                        resource: format!("booking {id}"),
                    });
                }
                Ok(Some(*id))
            }
            PlanAction::SetPointState { point, state } => {
                if Database::set_charging_point_state(self.conn, *point, state)? == 0 {
                    return Err(Error::NotFound {
                        resource: format!("charging point {point}"),
                    });
                }
                Ok(None)
            }
        }
    }

    fn deleted_booking(plan: &OperationPlan) -> Option<BookingId> {
        plan.actions.iter().find_map(|action| match action {
            PlanAction::DeleteBooking(id) => Some(*id),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charging_point::ChargingPointState;
    use crate::database::test_util::{
        booking_count, create_test_database, point_state, seed_point, seed_user,
    };
    use crate::ids::ChargingPointId;
    use crate::slot::BookingSlot;

    fn book_plan(user: crate::ids::UserId, point: ChargingPointId) -> OperationPlan {
        OperationPlan::new("Book")
            .add_action(PlanAction::InsertBooking {
                user,
                point,
                slot: BookingSlot::parse("2024-06-01 10:00:00").unwrap(),
            })
            .add_action(PlanAction::SetPointState {
                point,
                state: ChargingPointState::Reserved,
            })
    }

    #[test]
    fn test_execute_book_actions() {
        let db = create_test_database();
        let conn = db.connection();
        let user = seed_user(conn, 7, "alice");
        let point = seed_point(conn, 3, "available");

        let result = PlanExecutor::new(conn)
            .execute(&book_plan(user, point))
            .unwrap();

        assert!(result.success);
        assert!(!result.dry_run);
        assert_eq!(result.actions_taken.len(), 2);
        let id = result.booking_id.unwrap();
        assert!(Database::get_booking(conn, id).unwrap().is_some());
        assert_eq!(point_state(conn, point), "reserved");
    }

    #[test]
    fn test_dry_run_does_not_modify_database() {
        let db = create_test_database();
        let conn = db.connection();
        let user = seed_user(conn, 7, "alice");
        let point = seed_point(conn, 3, "available");

        let result = PlanExecutor::new(conn)
            .dry_run()
            .execute(&book_plan(user, point))
            .unwrap();

        assert!(result.dry_run);
        assert!(result.booking_id.is_none());
        assert_eq!(booking_count(conn), 0);
        assert_eq!(point_state(conn, point), "available");
    }

    #[test]
    fn test_dry_run_reports_deleted_booking() {
        let db = create_test_database();
        let plan = OperationPlan::new("Cancel").add_action(PlanAction::DeleteBooking(BookingId::new(4)));

        let result = PlanExecutor::new(db.connection())
            .dry_run()
            .execute(&plan)
            .unwrap();
        assert_eq!(result.booking_id, Some(BookingId::new(4)));
    }

    #[test]
    fn test_delete_missing_booking_fails() {
        let db = create_test_database();
        let plan = OperationPlan::new("Cancel").add_action(PlanAction::DeleteBooking(BookingId::new(4)));

        let err = PlanExecutor::new(db.connection()).execute(&plan).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_set_state_on_missing_point_fails() {
        let db = create_test_database();
        let plan = OperationPlan::new("Flip").add_action(PlanAction::SetPointState {
            point: ChargingPointId::new(99),
            state: ChargingPointState::Available,
        });

        let err = PlanExecutor::new(db.connection()).execute(&plan).unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_execution_result_includes_warnings() {
        let db = create_test_database();
        let plan = OperationPlan::new("Cancel").add_warning("nothing to cancel");

        let result = PlanExecutor::new(db.connection()).execute(&plan).unwrap();
        assert_eq!(result.warnings, vec!["nothing to cancel".to_string()]);
        assert!(result.actions_taken.is_empty());
        assert!(result.booking_id.is_none());
    }
}
