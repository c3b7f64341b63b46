//! Upcoming command implementation.
//!
//! This module implements the `upcoming` command, which lists a user's
//! bookings from now on in various formats (table, JSON, CSV, TSV).

use crate::error::CliError;
use crate::utils::{
    open_engine, parse_output_format, parse_slot, parse_user, resolve_output_format,
    write_delimited, write_json, GlobalOptions,
};
use chargebook::config::OutputFormat;
use chargebook::{BookingSlot, UpcomingBooking, UserId};
use clap::Args;
use std::io::Write;

/// Column headers for table/CSV/TSV output.
const COLUMN_HEADERS: [&str; 7] = [
    "booking_id",
    "booking_datetime",
    "charging_point_id",
    "charging_point_state",
    "slots_num",
    "street",
    "city",
];

/// List a user's upcoming bookings.
#[derive(Args)]
pub struct UpcomingCommand {
    /// User whose bookings to list
    #[arg(long, value_name = "USER_ID", value_parser = parse_user)]
    pub user: UserId,

    /// List bookings from this slot on instead of from now
    #[arg(long, value_name = "DATETIME", value_parser = parse_slot)]
    pub from: Option<BookingSlot>,

    /// Output format (table, json, csv, tsv)
    #[arg(long, value_name = "FORMAT", value_parser = parse_output_format)]
    pub format: Option<OutputFormat>,
}

impl UpcomingCommand {
    /// Execute the upcoming command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, engine) = open_engine(global)?;

        let bookings = match self.from {
            Some(from) => engine.get_user_upcoming_bookings_at(self.user, from)?,
            None => engine.get_user_upcoming_bookings(self.user)?,
        };

        match resolve_output_format(self.format, &config) {
            OutputFormat::Table => format_as_table(&bookings)?,
            OutputFormat::Json => write_json(&bookings)?,
            OutputFormat::Csv => write_delimited(&COLUMN_HEADERS, &rows(&bookings), b',')?,
            OutputFormat::Tsv => write_delimited(&COLUMN_HEADERS, &rows(&bookings), b'\t')?,
        }

        Ok(())
    }
}

/// Format bookings as a human-readable table.
fn format_as_table(bookings: &[UpcomingBooking]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for entry in bookings {
        writeln!(
            handle,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            entry.booking.id,
            entry.booking.slot,
            entry.booking.charging_point_id,
            entry.charging_point_state,
            entry.slots_num,
            entry.station.street.as_deref().unwrap_or("-"),
            entry.station.city.as_deref().unwrap_or("-"),
        )?;
    }

    Ok(())
}

fn rows(bookings: &[UpcomingBooking]) -> Vec<Vec<String>> {
    bookings
        .iter()
        .map(|entry| {
            vec![
                entry.booking.id.to_string(),
                entry.booking.slot.to_string(),
                entry.booking.charging_point_id.to_string(),
                entry.charging_point_state.to_string(),
                entry.slots_num.to_string(),
                entry.station.street.clone().unwrap_or_default(),
                entry.station.city.clone().unwrap_or_default(),
            ]
        })
        .collect()
}
