//! Cancel command implementation.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_booking, parse_user, print_dry_run, GlobalOptions,
};
use chargebook::operations::{execute_cancel, CancelOptions};
use chargebook::{BookingId, ReservationEngine, UserId};
use clap::Args;

/// Cancel a booking owned by the given user.
#[derive(Args)]
pub struct CancelCommand {
    /// Booking to cancel
    #[arg(long, value_name = "BOOKING_ID", value_parser = parse_booking)]
    pub booking: BookingId,

    /// User requesting the cancellation (must own the booking)
    #[arg(long, value_name = "USER_ID", value_parser = parse_user)]
    pub user: UserId,

    /// Show what would be cancelled without changing anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CancelCommand {
    /// Execute the cancel command.
    ///
    /// A missing booking and another user's booking are reported the same
    /// way, with exit code 1.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let cancelled = if self.dry_run {
            let result = execute_cancel(&mut db, CancelOptions::new(self.booking, self.user), true)?;
            if !global.quiet && result.booking_id.is_some() {
                print_dry_run(&result.actions_taken, &result.warnings);
            }
            result.booking_id.is_some()
        } else {
            ReservationEngine::new(db).try_cancel_booking(self.booking, self.user)?
        };

        if !cancelled {
            return Err(CliError::SemanticFailure(format!(
                "No booking {} found for user {}",
                self.booking, self.user
            )));
        }

        if !global.quiet && !self.dry_run {
            eprintln!("Cancelled booking {}", self.booking);
        }

        Ok(())
    }
}
