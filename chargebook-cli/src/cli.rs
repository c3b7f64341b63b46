//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    BookCommand, CancelCommand, CheckCommand, CompletionsCommand, InitCommand, ShowCommand,
    UpcomingCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for booking EV charging-point slots.
#[derive(Parser)]
#[command(name = "chargebook")]
#[command(version, about = "Book EV charging-point slots", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "CHARGEBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the lock wait (in seconds)
    #[arg(
        long,
        value_name = "SECONDS",
        global = true,
        env = "CHARGEBOOK_BUSY_TIMEOUT",
        value_parser = crate::utils::parse_busy_timeout
    )]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true, env = "CHARGEBOOK_DISABLE_AUTOINIT")]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Book a charging point for a slot
    Book(BookCommand),

    /// Cancel a booking
    Cancel(CancelCommand),

    /// Check whether a charging point can be booked
    Check(CheckCommand),

    /// Show one booking
    Show(ShowCommand),

    /// List a user's upcoming bookings
    Upcoming(UpcomingCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
