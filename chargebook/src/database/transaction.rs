//! Transaction management utilities.
//!
//! Every mutating operation runs inside an IMMEDIATE transaction. `BEGIN
//! IMMEDIATE` takes the database write lock before the first read, so the
//! check-then-act sequence of one booking or cancellation cannot interleave
//! with another one, in this process or any other.

use rusqlite::{ErrorCode, Transaction, TransactionBehavior};

use crate::error::{Error, Result};

use super::connection::Database;

impl Database {
    /// Begins an IMMEDIATE transaction.
    ///
    /// The returned transaction must be committed explicitly; dropping it
    /// rolls back every change made through it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LockTimeout`] if another writer holds the lock for
    /// longer than the configured busy timeout, or a database error if the
    /// transaction cannot be started.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use chargebook::database::{Database, DatabaseConfig};
    ///
    /// let mut db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
    /// let tx = db.begin_transaction().unwrap();
    /// // ... reads and writes through `tx` ...
    /// tx.commit().unwrap();
    /// ```
    pub fn begin_transaction(&mut self) -> Result<Transaction<'_>> {
        let seconds = self.lock_wait_seconds();
        self.conn
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .map_err(|e| map_lock_error(e, seconds))
    }

    /// The configured lock wait, rounded up to whole seconds.
    #[must_use]
    pub fn lock_wait_seconds(&self) -> u64 {
        let millis = self.config().busy_timeout.as_millis().div_ceil(1000);
        u64::try_from(millis).unwrap_or(u64::MAX)
    }
}

/// Converts a busy or locked `SQLite` error into [`Error::LockTimeout`].
///
/// Other errors are wrapped unchanged as [`Error::Database`].
#[must_use]
pub fn map_lock_error(err: rusqlite::Error, seconds: u64) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(failure, _)
            if matches!(
                failure.code,
                ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
            ) =>
        {
            Error::LockTimeout { seconds }
        }
        _ => Error::Database(err),
    }
}
