#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # chargebook
//!
//! A library for booking time slots on electric-vehicle charging points.
//!
//! A user reserves a specific charging point for a specific slot, cancels
//! their own reservation, and callers query booking state. Reservations and
//! cancellations are atomic, and two concurrent requests for the same point
//! never both succeed.
//!
//! ## Core Types
//!
//! - [`ReservationEngine`]: the booking API
//! - [`BookingSlot`]: the exact timestamp a point is reserved for
//! - [`Booking`], [`BookingDetails`], [`UpcomingBooking`]: booking records
//! - [`ChargingPointState`]: the `available` / `reserved` flag
//! - [`Error`], [`BookingFailure`] and [`Result`]: error handling types
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use chargebook::{BookingSlot, ChargingPointState};
//!
//! let slot = BookingSlot::parse("2024-06-01 10:00").unwrap();
//! assert_eq!(slot.to_string(), "2024-06-01 10:00:00");
//!
//! assert!(ChargingPointState::parse("available").is_available());
//! ```

pub mod booking;
pub mod charging_point;
pub mod config;
pub mod database;
pub mod engine;
pub mod error;
pub mod ids;
pub mod logging;
pub mod operations;
pub mod slot;

// Re-export key types at crate root for convenience
pub use booking::{Booking, BookingDetails, StationAddress, UpcomingBooking};
pub use charging_point::{ChargingPoint, ChargingPointState};
pub use config::{Config, ConfigBuilder};
pub use database::{Database, DatabaseConfig};
pub use engine::ReservationEngine;
pub use error::{BookingFailure, Error, Result, UnavailableReason};
pub use ids::{BookingId, ChargingPointId, StationId, UserId};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{
    Availability, BookOptions, BookPlan, CancelOptions, CancelPlan, ExecutionResult,
    OperationPlan, PlanAction, PlanExecutor,
};
pub use slot::{BookingSlot, InvalidSlotError};
