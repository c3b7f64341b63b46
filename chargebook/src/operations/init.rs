//! Database initialization operations.
//!
//! This module provides functionality for explicitly initializing the data
//! directory and booking database, with optional configuration file creation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::database::{Database, DatabaseConfig, DATABASE_FILE_NAME};
use crate::error::{Error, Result};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            overwrite: false,
            create_config: false,
        }
    }

    /// Sets whether to overwrite existing database.
    #[must_use]
    pub const fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create default configuration file.
    #[must_use]
    pub const fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Path of the database file inside the data directory.
    #[must_use]
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_FILE_NAME)
    }

    /// Path of the configuration file inside the data directory.
    #[must_use]
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join(crate::config::CONFIG_FILE_NAME)
    }
}

/// Result of initialization operation.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
}

/// Default configuration template, every key commented out.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r"# chargebook configuration
#
# Every key is optional. Environment variables (CHARGEBOOK_<KEY>) override
# values in this file.

# Seconds a booking or cancellation waits for the database lock (default: 5)
# maximum_lock_wait_seconds: 5

# Refuse to create the database implicitly; run `chargebook init` first
# disable_autoinit: false

# Default output format for listings: table, json, csv or tsv
# output_format: table
";

/// Initializes the data directory and booking database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is false
/// - The database cannot be removed or initialized
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use chargebook::operations::init::{init_database, InitOptions};
///
/// let options = InitOptions::new("/tmp/chargebook-data").with_create_config(true);
/// let result = init_database(&options).unwrap();
/// println!("database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let mut result = InitResult {
        data_dir_created: false,
        database_created: false,
        config_created: false,
        data_dir: options.data_dir.clone(),
    };

    if !options.data_dir.exists() {
        fs::create_dir_all(&options.data_dir)?;
        result.data_dir_created = true;
    }

    let db_path = options.database_path();
    if db_path.exists() {
        if !options.overwrite {
            return Err(Error::AlreadyInitialized { path: db_path });
        }
        remove_database_files(&db_path)?;
        log::info!("removed existing database {}", db_path.display());
    }

    Database::open(DatabaseConfig::new(&db_path))?;
    result.database_created = true;

    if options.create_config {
        let config_path = options.config_path();
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
            result.config_created = true;
        }
    }

    Ok(result)
}

/// Removes a database file together with its WAL and shared-memory files.
fn remove_database_files(db_path: &Path) -> Result<()> {
    fs::remove_file(db_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut sidecar = db_path.as_os_str().to_owned();
        sidecar.push(suffix);
        let sidecar = PathBuf::from(sidecar);
        if sidecar.exists() {
            fs::remove_file(sidecar)?;
        }
    }
    Ok(())
}
