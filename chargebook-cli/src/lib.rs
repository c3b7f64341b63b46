//! Library exports for chargebook-cli.
//!
//! The binary is a thin wrapper around these modules; exposing them lets
//! documentation tooling reach the CLI structure.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
