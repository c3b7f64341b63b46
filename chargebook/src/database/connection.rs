//! Opening the booking database.

use rusqlite::{Connection, OpenFlags};

use crate::error::{Error, Result};

use super::config::DatabaseConfig;
use super::migrations::check_schema_compatibility;

/// An open booking database.
///
/// Each thread or process that books concurrently opens its own `Database`;
/// `SQLite` serializes their write transactions through the file lock.
///
/// # Examples
///
/// ```no_run
/// use chargebook::database::{Database, DatabaseConfig};
///
/// let db = Database::open(DatabaseConfig::new("/tmp/chargebook.db")).unwrap();
/// ```
#[derive(Debug)]
pub struct Database {
    pub(super) conn: Connection,
    config: DatabaseConfig,
}

impl Database {
    /// Opens (and if allowed, creates) the database at `config.path`.
    ///
    /// The connection runs in WAL mode so availability checks never wait
    /// on a booking in progress, enforces foreign keys, and waits up to
    /// `config.busy_timeout` for the write lock. A fresh file gets the
    /// current schema; a file with another schema version is refused.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataDirectoryNotFound`] when the file is missing and
    /// `auto_create` is off, [`Error::UnsupportedSchemaVersion`] for a
    /// foreign schema, and I/O or `SQLite` errors otherwise.
    pub fn open(config: DatabaseConfig) -> Result<Self> {
        let mut flags = OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        if !config.path.exists() {
            let parent = config.path.parent().filter(|p| !p.as_os_str().is_empty());
            if !config.auto_create {
                return Err(Error::DataDirectoryNotFound {
                    path: parent.map_or_else(|| config.path.clone(), std::path::Path::to_path_buf),
                });
            }
            if let Some(parent) = parent {
                std::fs::create_dir_all(parent)?;
            }
            flags |= OpenFlags::SQLITE_OPEN_CREATE;
        }

        let conn = Connection::open_with_flags(&config.path, flags)?;
        conn.busy_timeout(config.busy_timeout)?;

        // journal_mode answers with a row
        let _: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA synchronous = NORMAL; PRAGMA foreign_keys = ON;")?;
        check_schema_compatibility(&conn)?;

        log::debug!(
            "opened database {} (busy timeout {:?})",
            config.path.display(),
            config.busy_timeout
        );
        Ok(Self { conn, config })
    }

    /// The underlying `SQLite` connection, for reads outside a transaction.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The configuration this database was opened with.
    #[must_use]
    pub const fn config(&self) -> &DatabaseConfig {
        &self.config
    }
}
