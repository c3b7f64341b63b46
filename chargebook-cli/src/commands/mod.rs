//! CLI command implementations.
//!
//! - `init`: Create the data directory and database
//! - `book`: Book a charging point for a slot
//! - `cancel`: Cancel one of the user's bookings
//! - `check`: Check whether a point can be booked for a slot
//! - `show`: Display one booking
//! - `upcoming`: List a user's upcoming bookings
//! - `completions`: Generate shell completion scripts

pub mod book;
pub mod cancel;
pub mod check;
pub mod completions;
pub mod init;
pub mod show;
pub mod upcoming;

pub use book::BookCommand;
pub use cancel::CancelCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use show::ShowCommand;
pub use upcoming::UpcomingCommand;
