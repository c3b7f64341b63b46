//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including data directory resolution, configuration loading, database
//! management, and argument parsing.

use crate::error::CliError;
use chargebook::config::OutputFormat;
use chargebook::database::{default_data_dir, DATABASE_FILE_NAME};
use chargebook::{
    BookingId, BookingSlot, ChargingPointId, Config, ConfigBuilder, Database, DatabaseConfig,
    ReservationEngine, UserId,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the lock wait (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

/// Resolve the data directory: `--data-dir` / `CHARGEBOOK_DATA_DIR`, else
/// `~/.chargebook`.
pub fn resolve_data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => default_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. `config.yaml` in the data directory
/// 3. Built-in defaults (lowest priority)
///
/// Global flags are applied on top by the callers that use them.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let data_dir = resolve_data_dir(global)?;

    ConfigBuilder::new()
        .with_data_dir(&data_dir)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the booking database.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled by flag, environment, or configuration file.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let db_path = resolve_data_dir(global)?.join(DATABASE_FILE_NAME);

    if !db_path.exists() && (global.disable_autoinit || config.autoinit_disabled()) {
        return Err(CliError::NoDataDirectory);
    }

    let busy_timeout = global
        .busy_timeout
        .map_or_else(|| config.lock_wait(), Duration::from_secs);

    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(busy_timeout);
    Database::open(db_config).map_err(CliError::from)
}

/// Load configuration and open a reservation engine on the database.
pub fn open_engine(global: &GlobalOptions) -> Result<(Config, ReservationEngine), CliError> {
    let config = load_configuration(global)?;
    let db = open_database(global, &config)?;
    Ok((config, ReservationEngine::new(db)))
}

/// Pick the output format: the command's `--format` if given, else the
/// configured default.
pub fn resolve_output_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or(config.output_format).unwrap_or_default()
}

/// Clap value parser for `--format`.
pub fn parse_output_format(value: &str) -> Result<OutputFormat, String> {
    OutputFormat::parse(value).map_err(|e| e.to_string())
}

/// Clap value parser for slot arguments.
pub fn parse_slot(value: &str) -> Result<BookingSlot, String> {
    BookingSlot::parse(value).map_err(|e| e.to_string())
}

/// Clap value parser for `--busy-timeout`: whole seconds, at least one.
pub fn parse_busy_timeout(value: &str) -> Result<u64, String> {
    match value.trim().parse::<u64>() {
        Ok(0) => Err("busy timeout must be at least 1 second".into()),
        Ok(seconds) => Ok(seconds),
        Err(e) => Err(format!("invalid busy timeout '{value}': {e}")),
    }
}

/// Clap value parser for user ids.
pub fn parse_user(value: &str) -> Result<UserId, String> {
    parse_row_id(value).map(UserId::new)
}

/// Clap value parser for charging point ids.
pub fn parse_point(value: &str) -> Result<ChargingPointId, String> {
    parse_row_id(value).map(ChargingPointId::new)
}

/// Clap value parser for booking ids.
pub fn parse_booking(value: &str) -> Result<BookingId, String> {
    parse_row_id(value).map(BookingId::new)
}

fn parse_row_id(value: &str) -> Result<i64, String> {
    match value.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        Ok(_) => Err(format!("id must be positive, got {value}")),
        Err(e) => Err(format!("invalid id '{value}': {e}")),
    }
}

/// Print plan actions and warnings for a dry run to stderr.
pub fn print_dry_run(actions: &[String], warnings: &[String]) {
    eprintln!("Dry run - would perform the following actions:");
    for (i, action) in actions.iter().enumerate() {
        eprintln!("  {}. {}", i + 1, action);
    }
    if !warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in warnings {
            eprintln!("  - {warning}");
        }
    }
}

/// Write a header and rows as CSV (`b','`) or TSV (`b'\t'`) to stdout.
pub fn write_delimited(headers: &[&str], rows: &[Vec<String>], delimiter: u8) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(stdout.lock());

    writer.write_record(headers).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a value as pretty JSON to stdout.
pub fn write_json<T: serde::Serialize>(value: &T) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value).map_err(std::io::Error::other)?;
    writeln!(handle)?;
    Ok(())
}

/// Convert csv::Error to CliError.
fn csv_error(e: csv::Error) -> CliError {
    CliError::Io(std::io::Error::other(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_row_id() {
        assert_eq!(parse_user("7").unwrap(), UserId::new(7));
        assert_eq!(parse_point(" 3 ").unwrap(), ChargingPointId::new(3));
        assert!(parse_booking("0").is_err());
        assert!(parse_booking("-1").is_err());
        assert!(parse_booking("abc").is_err());
    }

    #[test]
    fn test_parse_slot() {
        assert_eq!(
            parse_slot("2024-06-01T10:00").unwrap().to_string(),
            "2024-06-01 10:00:00"
        );
        assert!(parse_slot("tomorrow").is_err());
        assert!(parse_slot("+10000-01-01 10:00:00").is_err());
    }

    #[test]
    fn test_parse_busy_timeout() {
        assert_eq!(parse_busy_timeout("3").unwrap(), 3);
        assert!(parse_busy_timeout("0").is_err());
        assert!(parse_busy_timeout("soon").is_err());
    }

    #[test]
    fn test_resolve_output_format() {
        let config = Config {
            output_format: Some(OutputFormat::Json),
            ..Config::default()
        };
        assert_eq!(resolve_output_format(None, &config), OutputFormat::Json);
        assert_eq!(
            resolve_output_format(Some(OutputFormat::Csv), &config),
            OutputFormat::Csv
        );
        assert_eq!(
            resolve_output_format(None, &Config::default()),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_resolve_data_dir_prefers_flag() {
        let global = GlobalOptions {
            verbose: false,
            quiet: false,
            data_dir: Some(PathBuf::from("/srv/chargebook")),
            busy_timeout: None,
            disable_autoinit: false,
        };
        assert_eq!(
            resolve_data_dir(&global).unwrap(),
            PathBuf::from("/srv/chargebook")
        );
    }
}
