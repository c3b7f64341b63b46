//! Book command implementation.
//!
//! This module implements the `book` command, which reserves a charging
//! point for a user at an exact slot.

use crate::error::CliError;
use crate::utils::{
    load_configuration, open_database, parse_point, parse_slot, parse_user, print_dry_run,
    GlobalOptions,
};
use chargebook::operations::{execute_book, BookOptions};
use chargebook::{BookingSlot, ChargingPointId, ReservationEngine, UserId};
use clap::Args;

/// Book a charging point for a slot.
#[derive(Args)]
pub struct BookCommand {
    /// User the booking is for
    #[arg(long, value_name = "USER_ID", value_parser = parse_user)]
    pub user: UserId,

    /// Charging point to reserve
    #[arg(long, value_name = "POINT_ID", value_parser = parse_point)]
    pub point: ChargingPointId,

    /// Slot to reserve ("YYYY-MM-DD HH:MM:SS")
    #[arg(long, value_name = "DATETIME", value_parser = parse_slot)]
    pub at: BookingSlot,

    /// Check availability under the lock and show the plan without booking
    #[arg(long)]
    pub dry_run: bool,
}

impl BookCommand {
    /// Execute the book command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        if self.dry_run {
            let options = BookOptions::new(self.user, self.point, self.at);
            let result = execute_book(&mut db, &options, true)?;
            if !global.quiet {
                print_dry_run(&result.actions_taken, &result.warnings);
            }
            return Ok(());
        }

        let mut engine = ReservationEngine::new(db);
        let id = engine.create_booking(self.user, self.point, self.at)?;

        // Only the id goes to stdout so scripts can capture it.
        println!("{id}");

        Ok(())
    }
}
