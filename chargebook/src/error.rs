//! Error types for the chargebook library.
//!
//! Two layers are kept apart here. [`Error`] covers infrastructure and
//! validation failures (storage, I/O, configuration, malformed input).
//! [`BookingFailure`] is the outcome type of the booking transaction, where
//! an unavailable slot is an ordinary negative result rather than a fault.

use std::path::PathBuf;

use thiserror::Error;

use crate::charging_point::ChargingPointState;

/// Result type alias for operations that may fail with a chargebook error.
///
/// # Examples
///
/// ```
/// use chargebook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the chargebook library.
#[derive(Debug, Error)]
pub enum Error {
    /// A database error occurred.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A booking slot could not be parsed.
    #[error("invalid booking slot '{value}': {reason}")]
    InvalidSlot {
        /// The rejected input.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// The write lock could not be acquired within the busy timeout.
    #[error("database lock timeout after {seconds}s")]
    LockTimeout {
        /// The number of seconds waited before timing out.
        seconds: u64,
    },

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// A database already exists where initialization was requested.
    #[error("database already exists: {} (use overwrite to replace it)", path.display())]
    AlreadyInitialized {
        /// Path of the existing database file.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::slot::InvalidSlotError> for Error {
    fn from(err: crate::slot::InvalidSlotError) -> Self {
        Self::InvalidSlot {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if the error is a lock timeout, which callers may retry.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargebook::Error;
    ///
    /// assert!(Error::LockTimeout { seconds: 5 }.is_lock_timeout());
    /// ```
    #[must_use]
    pub fn is_lock_timeout(&self) -> bool {
        matches!(self, Self::LockTimeout { .. })
    }
}

/// Why a charging point cannot be booked for a slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    /// No charging point with the requested id exists.
    PointNotFound,
    /// The charging point exists but is not in the `available` state.
    PointNotAvailable(ChargingPointState),
    /// A booking already holds this exact point and slot.
    SlotTaken,
}

impl std::fmt::Display for UnavailableReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PointNotFound => write!(f, "charging point not found"),
            Self::PointNotAvailable(state) => write!(f, "charging point is {state}"),
            Self::SlotTaken => write!(f, "slot already booked"),
        }
    }
}

/// Failure outcome of a booking transaction.
///
/// `Unavailable` is a business-rule conflict and is expected under normal
/// load. `TransactionError` wraps an infrastructure failure; the transaction
/// has been rolled back and storage is exactly as it was before the call.
#[derive(Debug, Error)]
pub enum BookingFailure {
    /// The point is missing, not available, or the slot is taken.
    #[error("unavailable: {0}")]
    Unavailable(UnavailableReason),

    /// The storage layer failed mid-transaction.
    #[error("transaction error: {0}")]
    TransactionError(#[source] Error),
}

impl BookingFailure {
    /// Returns true for the business-rule conflict variant.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

impl From<Error> for BookingFailure {
    fn from(err: Error) -> Self {
        Self::TransactionError(err)
    }
}

impl From<rusqlite::Error> for BookingFailure {
    fn from(err: rusqlite::Error) -> Self {
        Self::TransactionError(Error::Database(err))
    }
}
