//! Booking operations using the plan-execute pattern.
//!
//! # Architecture
//!
//! Mutating operations are split into two phases, both run inside one
//! IMMEDIATE transaction:
//! 1. **Planning**: checks availability or ownership under the write lock
//!    and builds a plan of row changes
//! 2. **Execution**: applies the plan to the same transaction, which is
//!    then committed (or rolled back in dry-run mode)
//!
//! # Examples
//!
//! ```no_run
//! use chargebook::database::{Database, DatabaseConfig};
//! use chargebook::operations::{execute_book, execute_cancel, BookOptions, CancelOptions};
//! use chargebook::{BookingSlot, ChargingPointId, UserId};
//!
//! let mut db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
//! let user = UserId::new(7);
//! let slot = BookingSlot::parse("2024-06-01 10:00:00").unwrap();
//!
//! let booked = execute_book(&mut db, &BookOptions::new(user, ChargingPointId::new(3), slot), false)
//!     .unwrap();
//! let booking = booked.booking_id.unwrap();
//!
//! let cancelled = execute_cancel(&mut db, CancelOptions::new(booking, user), false).unwrap();
//! assert_eq!(cancelled.booking_id, Some(booking));
//! ```

pub mod availability;
pub mod book;
pub mod cancel;
pub mod executor;
pub mod init;
pub mod plan;
pub mod query;

pub use availability::{check_availability, is_charging_point_available, Availability};
pub use book::{execute_book, BookOptions, BookPlan};
pub use cancel::{execute_cancel, CancelOptions, CancelPlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use plan::{OperationPlan, PlanAction};
