//! Command to check whether a charging point can be booked for a slot.

use crate::error::CliError;
use crate::utils::{open_engine, parse_point, parse_slot, GlobalOptions};
use chargebook::{Availability, BookingSlot, ChargingPointId};
use clap::Args;

/// Check whether a charging point can be booked for a slot.
#[derive(Args)]
pub struct CheckCommand {
    /// Charging point to check
    #[arg(long, value_name = "POINT_ID", value_parser = parse_point)]
    pub point: ChargingPointId,

    /// Slot to check ("YYYY-MM-DD HH:MM:SS")
    #[arg(long, value_name = "DATETIME", value_parser = parse_slot)]
    pub at: BookingSlot,
}

impl CheckCommand {
    /// Execute the check command.
    ///
    /// The answer is a snapshot; a later `book` may still be refused.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_config, engine) = open_engine(global)?;

        match engine.check_availability(self.point, self.at)? {
            Availability::Available => {
                println!("available");
                Ok(())
            }
            Availability::Unavailable(reason) => {
                println!("unavailable");
                Err(CliError::SemanticFailure(format!(
                    "Charging point {} is unavailable at {}: {reason}",
                    self.point, self.at
                )))
            }
        }
    }
}
