//! Configuration system for chargebook.
//!
//! # Configuration Precedence
//!
//! Configuration is merged from the following sources (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`CHARGEBOOK_*`)
//! 3. The data directory's `config.yaml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use chargebook::config::ConfigBuilder;
//!
//! let config = ConfigBuilder::new()
//!     .with_data_dir("/var/lib/chargebook")
//!     .build()
//!     .unwrap();
//!
//! println!("lock wait: {:?}", config.lock_wait());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use schema::{Config, OutputFormat, DEFAULT_LOCK_WAIT_SECONDS};
