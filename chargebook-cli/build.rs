//! Build script for chargebook-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("chargebook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Book EV charging-point slots")
        .long_about("Command-line tool for reserving charging points and managing bookings")
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("CHARGEBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the lock wait (in seconds)")
                .value_name("SECONDS")
                .global(true)
                .env("CHARGEBOOK_BUSY_TIMEOUT"),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue)
                .env("CHARGEBOOK_DISABLE_AUTOINIT"),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Set up the booking database and an optional configuration file"),
            Command::new("book")
                .about("Book a charging point for a slot")
                .long_about("Reserve a charging point for a user at an exact slot and print the booking id"),
            Command::new("cancel")
                .about("Cancel a booking")
                .long_about("Cancel a booking owned by the given user and free its charging point"),
            Command::new("check")
                .about("Check whether a charging point can be booked")
                .long_about("Print available or unavailable and exit 1 when the point cannot be booked"),
            Command::new("show")
                .about("Show one booking")
                .long_about("Display a booking with its charging point, station and owner"),
            Command::new("upcoming")
                .about("List a user's upcoming bookings")
                .long_about("Display a user's bookings from now on, earliest first"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("chargebook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
