//! Charging point state as seen by the reservation engine.
//!
//! The engine only ever moves a point between `available` and `reserved`.
//! Other subsystems may put a point into other states (charging, out of
//! service, ...); those are carried through untouched as [`ChargingPointState::Other`].

use std::fmt;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::ids::{ChargingPointId, StationId};

/// The `charging_point_state` column.
///
/// # Examples
///
/// ```
/// use chargebook::ChargingPointState;
///
/// assert_eq!(ChargingPointState::parse("available"), ChargingPointState::Available);
/// assert_eq!(ChargingPointState::Reserved.as_str(), "reserved");
///
/// let other = ChargingPointState::parse("out_of_service");
/// assert!(!other.is_available());
/// assert_eq!(other.as_str(), "out_of_service");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChargingPointState {
    /// Free to be booked.
    Available,
    /// Held by a booking managed by this engine.
    Reserved,
    /// Any state owned by another subsystem.
    Other(String),
}

impl ChargingPointState {
    /// Parses a stored state. Unknown values are kept verbatim.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        match value {
            "available" => Self::Available,
            "reserved" => Self::Reserved,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the stored text form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Available => "available",
            Self::Reserved => "reserved",
            Self::Other(value) => value,
        }
    }

    /// Returns true only for [`ChargingPointState::Available`].
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

impl fmt::Display for ChargingPointState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ChargingPointState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChargingPointState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl ToSql for ChargingPointState {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ChargingPointState {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().map(Self::parse)
    }
}

/// A charging point row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargingPoint {
    /// Row id of the point.
    pub id: ChargingPointId,
    /// Station the point belongs to.
    pub station_id: StationId,
    /// Current state.
    pub state: ChargingPointState,
    /// Number of physical slots (connectors) reported for the point.
    pub slots_num: i64,
}
