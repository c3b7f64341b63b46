//! Common test utilities for integration tests.
//!
//! The engine never creates users, stations or charging points, so these
//! helpers seed them with plain SQL, the way the owning subsystems would.

pub mod database;

use chargebook::BookingSlot;

/// Parses a slot, panicking on bad test input.
#[allow(dead_code)]
pub fn slot(text: &str) -> BookingSlot {
    BookingSlot::parse(text).unwrap()
}

/// Describes the rows a test needs before it starts.
///
/// # Examples
///
/// ```no_run
/// # use common::Fixture;
/// let fixture = Fixture::new().with_user(7, "alice").with_point(3, "available");
/// ```
#[allow(dead_code)]
#[derive(Default)]
pub struct Fixture {
    users: Vec<(i64, String)>,
    points: Vec<(i64, String)>,
}

#[allow(dead_code)]
impl Fixture {
    /// Creates an empty fixture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user.
    pub fn with_user(mut self, id: i64, name: &str) -> Self {
        self.users.push((id, name.to_string()));
        self
    }

    /// Adds a charging point (on its own station) in the given state.
    pub fn with_point(mut self, id: i64, state: &str) -> Self {
        self.points.push((id, state.to_string()));
        self
    }

    /// Inserts every row into the database.
    pub fn seed(&self, conn: &rusqlite::Connection) {
        for (id, name) in &self.users {
            database::insert_user(conn, *id, name);
        }
        for (id, state) in &self.points {
            database::insert_point(conn, *id, state);
        }
    }
}
