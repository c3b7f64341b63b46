//! Identifier newtypes for the entities the engine touches.
//!
//! All identifiers are SQLite integer row ids. Wrapping them keeps a user id
//! from being passed where a charging point id is expected.

use std::fmt;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

macro_rules! row_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wraps a raw row id.
            #[must_use]
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// Returns the underlying row id.
            #[must_use]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl From<i64> for $name {
            fn from(value: i64) -> Self {
                Self(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl ToSql for $name {
            fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
                Ok(ToSqlOutput::from(self.0))
            }
        }

        impl FromSql for $name {
            fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
                i64::column_result(value).map(Self)
            }
        }
    };
}

row_id!(
    /// Identifies a user (the owner of a booking).
    ///
    /// # Examples
    ///
    /// ```
    /// use chargebook::UserId;
    ///
    /// let user = UserId::new(7);
    /// assert_eq!(user.value(), 7);
    /// assert_eq!(user.to_string(), "7");
    /// ```
    UserId
);

row_id!(
    /// Identifies a single reservable charging connector.
    ChargingPointId
);

row_id!(
    /// Identifies the station a charging point belongs to.
    StationId
);

row_id!(
    /// Identifies a booking. Assigned by storage on insert and never reused.
    BookingId
);
