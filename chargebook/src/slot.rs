//! The booking slot: the exact timestamp a charging point is reserved for.
//!
//! Two bookings conflict only when they name the same charging point and
//! exactly the same slot; there is no interval overlap. Slots are naive local
//! timestamps with one-second granularity and are stored in the canonical
//! text form `YYYY-MM-DD HH:MM:SS`, so slot equality in storage is plain text
//! equality and lexical order is chronological order.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDateTime, SubsecRound};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Canonical storage and display format.
pub const SLOT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Years whose canonical text is exactly four digits; outside this range
/// lexical order stops matching chronological order.
const YEAR_RANGE: std::ops::RangeInclusive<i32> = 0..=9999;

/// Input formats accepted by [`BookingSlot::parse`], in order of preference.
///
/// The minute-precision forms are what HTML `datetime-local` inputs submit.
const ACCEPTED_FORMATS: [&str; 4] = [
    SLOT_FORMAT,
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A reservable time slot.
///
/// # Examples
///
/// ```
/// use chargebook::BookingSlot;
///
/// let slot: BookingSlot = "2024-06-01 10:00:00".parse().unwrap();
/// assert_eq!(slot.to_string(), "2024-06-01 10:00:00");
///
/// // Minute precision and the ISO `T` separator are accepted too.
/// let same: BookingSlot = "2024-06-01T10:00".parse().unwrap();
/// assert_eq!(slot, same);
///
/// assert!("next tuesday".parse::<BookingSlot>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingSlot(NaiveDateTime);

impl BookingSlot {
    /// Creates a slot from a timestamp, dropping any sub-second part.
    #[must_use]
    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime.trunc_subsecs(0))
    }

    /// Parses a slot from text.
    ///
    /// # Errors
    ///
    /// Returns an error if the input matches none of the accepted formats
    /// or the year is outside 0000-9999.
    pub fn parse(input: &str) -> Result<Self, InvalidSlotError> {
        let trimmed = input.trim();
        let datetime = ACCEPTED_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| InvalidSlotError {
                value: input.to_string(),
                reason: "expected YYYY-MM-DD HH:MM:SS".into(),
            })?;

        if !YEAR_RANGE.contains(&datetime.year()) {
            return Err(InvalidSlotError {
                value: input.to_string(),
                reason: "year must be between 0000 and 9999".into(),
            });
        }
        Ok(Self::new(datetime))
    }

    /// Returns the slot as a timestamp.
    #[must_use]
    pub const fn datetime(self) -> NaiveDateTime {
        self.0
    }

    /// Returns the canonical text form used in storage.
    #[must_use]
    pub fn to_canonical(self) -> String {
        self.0.format(SLOT_FORMAT).to_string()
    }
}

impl From<NaiveDateTime> for BookingSlot {
    fn from(datetime: NaiveDateTime) -> Self {
        Self::new(datetime)
    }
}

impl FromStr for BookingSlot {
    type Err = InvalidSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for BookingSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(SLOT_FORMAT))
    }
}

impl Serialize for BookingSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_canonical())
    }
}

impl<'de> Deserialize<'de> for BookingSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl ToSql for BookingSlot {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.to_canonical()))
    }
}

impl FromSql for BookingSlot {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Self::parse(text).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Error type for unparseable slot text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSlotError {
    /// The rejected input.
    pub value: String,
    /// Why it was rejected.
    pub reason: String,
}

impl fmt::Display for InvalidSlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid booking slot '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidSlotError {}
