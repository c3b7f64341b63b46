//! Command to display one booking with its point, station and owner.

use crate::error::CliError;
use crate::utils::{
    open_engine, parse_booking, parse_output_format, resolve_output_format, write_delimited,
    write_json, GlobalOptions,
};
use chargebook::config::OutputFormat;
use chargebook::{BookingDetails, BookingId};
use clap::Args;

/// Column headers for CSV/TSV output.
const COLUMN_HEADERS: [&str; 11] = [
    "booking_id",
    "booking_datetime",
    "user_id",
    "user_name",
    "user_email",
    "charging_point_id",
    "charging_point_state",
    "slots_num",
    "street",
    "city",
    "municipality",
];

/// Show one booking.
#[derive(Args)]
pub struct ShowCommand {
    /// Booking to display
    #[arg(long, value_name = "BOOKING_ID", value_parser = parse_booking)]
    pub booking: BookingId,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT", value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

impl ShowCommand {
    /// Execute the show command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, engine) = open_engine(global)?;

        let Some(details) = engine.get_booking_details(self.booking)? else {
            return Err(CliError::SemanticFailure(format!(
                "Booking {} not found",
                self.booking
            )));
        };

        match resolve_output_format(self.format, &config) {
            OutputFormat::Table => print_details(&details),
            OutputFormat::Json => write_json(&details)?,
            OutputFormat::Csv => write_delimited(&COLUMN_HEADERS, &[details_row(&details)], b',')?,
            OutputFormat::Tsv => write_delimited(&COLUMN_HEADERS, &[details_row(&details)], b'\t')?,
        }

        Ok(())
    }
}

fn print_details(details: &BookingDetails) {
    let booking = &details.booking;
    println!("Booking: {}", booking.id);
    println!("Slot: {}", booking.slot);
    println!(
        "User: {} ({}, {})",
        booking.user_id, details.user_name, details.user_email
    );
    println!(
        "Charging point: {} ({}, {} slots)",
        booking.charging_point_id, details.charging_point_state, details.slots_num
    );
    println!("Station: {}", details.station);
}

fn details_row(details: &BookingDetails) -> Vec<String> {
    let booking = &details.booking;
    vec![
        booking.id.to_string(),
        booking.slot.to_string(),
        booking.user_id.to_string(),
        details.user_name.clone(),
        details.user_email.clone(),
        booking.charging_point_id.to_string(),
        details.charging_point_state.to_string(),
        details.slots_num.to_string(),
        details.station.street.clone().unwrap_or_default(),
        details.station.city.clone().unwrap_or_default(),
        details.station.municipality.clone().unwrap_or_default(),
    ]
}
