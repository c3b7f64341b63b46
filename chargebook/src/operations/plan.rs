//! Plan types for booking operations.
//!
//! A plan lists the row changes a booking or cancellation will make. Plans
//! are built inside the write transaction, after the availability and
//! ownership checks, and are then applied to the same transaction.

use crate::charging_point::ChargingPointState;
use crate::ids::{BookingId, ChargingPointId, UserId};
use crate::slot::BookingSlot;

/// A single row change performed during plan execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a booking row.
    InsertBooking {
        /// Owner of the new booking.
        user: UserId,
        /// Point being reserved.
        point: ChargingPointId,
        /// Slot being reserved.
        slot: BookingSlot,
    },

    /// Delete a booking row.
    DeleteBooking(BookingId),

    /// Set the state of a charging point.
    SetPointState {
        /// Point to update.
        point: ChargingPointId,
        /// New state.
        state: ChargingPointState,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargebook::operations::PlanAction;
    /// use chargebook::{BookingId, ChargingPointId, ChargingPointState};
    ///
    /// let action = PlanAction::SetPointState {
    ///     point: ChargingPointId::new(3),
    ///     state: ChargingPointState::Reserved,
    /// };
    /// assert_eq!(action.description(), "Set charging point 3 to reserved");
    /// assert_eq!(
    ///     PlanAction::DeleteBooking(BookingId::new(9)).description(),
    ///     "Delete booking 9"
    /// );
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::InsertBooking { user, point, slot } => {
                format!("Book charging point {point} at {slot} for user {user}")
            }
            Self::DeleteBooking(id) => format!("Delete booking {id}"),
            Self::SetPointState { point, state } => {
                format!("Set charging point {point} to {state}")
            }
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans can be inspected, logged, or executed. They include a description,
/// a sequence of actions, and any warnings that should be communicated to
/// the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargebook::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Cancel booking 4");
    /// assert_eq!(plan.description, "Cancel booking 4");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
