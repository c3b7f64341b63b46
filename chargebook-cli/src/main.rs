//! Main entry point for the chargebook CLI.
//!
//! It provides commands for managing charging point bookings:
//! - `book`: Book a charging point for a slot
//! - `cancel`: Cancel a booking
//! - `check`: Check whether a point can be booked
//! - `show`: Display one booking
//! - `upcoming`: List a user's upcoming bookings

use chargebook_cli::cli::{Cli, Command};
use chargebook_cli::utils::GlobalOptions;
use clap::Parser;

/// Exit code for argument errors, matching `CliError::InvalidArguments`.
const INVALID_ARGUMENTS_EXIT_CODE: i32 = 4;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout and exit 0.
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            std::process::exit(INVALID_ARGUMENTS_EXIT_CODE);
        }
    };

    let _level = chargebook::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        Command::Init(cmd) => cmd.execute(&global),
        Command::Book(cmd) => cmd.execute(&global),
        Command::Cancel(cmd) => cmd.execute(&global),
        Command::Check(cmd) => cmd.execute(&global),
        Command::Show(cmd) => cmd.execute(&global),
        Command::Upcoming(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
