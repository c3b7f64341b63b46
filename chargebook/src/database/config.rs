//! Where the database lives and how long writers wait for it.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{Error, Result};

/// File name of the database inside the data directory.
pub const DATABASE_FILE_NAME: &str = "chargebook.db";

const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection parameters for [`Database::open`](super::Database::open).
///
/// # Examples
///
/// ```
/// use chargebook::database::DatabaseConfig;
/// use std::time::Duration;
///
/// let config = DatabaseConfig::new("/tmp/chargebook.db")
///     .with_busy_timeout(Duration::from_secs(10));
/// assert_eq!(config.busy_timeout, Duration::from_secs(10));
/// assert!(config.auto_create);
/// ```
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Path to the database file.
    pub path: PathBuf,
    /// Longest wait for the write lock before a booking or cancellation
    /// fails with a lock timeout.
    pub busy_timeout: Duration,
    /// Create the file (and its directory) when it is missing.
    pub auto_create: bool,
}

impl DatabaseConfig {
    /// A config for `path` with a five second lock wait and auto-creation on.
    #[must_use]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            auto_create: true,
        }
    }

    /// Sets the lock wait.
    #[must_use]
    pub fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }

    /// Refuse to create a missing database.
    #[must_use]
    pub fn without_auto_create(mut self) -> Self {
        self.auto_create = false;
        self
    }
}

/// `~/.chargebook`.
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_data_dir() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| Error::Validation {
        field: "data_dir".into(),
        message: "no home directory; set CHARGEBOOK_DATA_DIR".into(),
    })?;
    Ok(home.join(".chargebook"))
}

/// `CHARGEBOOK_DATA_DIR` if set, else [`default_data_dir`].
///
/// # Errors
///
/// Returns an error if the variable is unset and there is no home directory.
pub fn resolve_data_dir() -> Result<PathBuf> {
    std::env::var_os("CHARGEBOOK_DATA_DIR").map_or_else(default_data_dir, |dir| Ok(dir.into()))
}

/// [`DATABASE_FILE_NAME`] inside [`resolve_data_dir`].
///
/// # Errors
///
/// See [`resolve_data_dir`].
pub fn resolve_database_path() -> Result<PathBuf> {
    Ok(resolve_data_dir()?.join(DATABASE_FILE_NAME))
}
