//! Configuration schema definitions.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default lock wait when nothing is configured.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// Every field is optional so that partial sources (a config file, the
/// environment, programmatic overrides) can be layered with
/// [`Config::merge`].
///
/// # Examples
///
/// ```
/// use chargebook::config::{Config, OutputFormat};
///
/// let config: Config = serde_yaml::from_str("maximum_lock_wait_seconds: 10\n").unwrap();
/// assert_eq!(config.maximum_lock_wait_seconds, Some(10));
/// assert_eq!(config.output_format, None);
///
/// // Unknown keys are rejected.
/// assert!(serde_yaml::from_str::<Config>("port_range: 1\n").is_err());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Maximum time to wait for the database write lock (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Output format for listing commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The built-in defaults, with every field set.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            maximum_lock_wait_seconds: Some(DEFAULT_LOCK_WAIT_SECONDS),
            disable_autoinit: Some(false),
            output_format: Some(OutputFormat::Table),
        }
    }

    /// Overlays `source` onto `self`: every field set in `source` wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use chargebook::config::Config;
    ///
    /// let mut config = Config::with_defaults();
    /// config.merge(&Config {
    ///     maximum_lock_wait_seconds: Some(30),
    ///     ..Default::default()
    /// });
    /// assert_eq!(config.maximum_lock_wait_seconds, Some(30));
    /// assert_eq!(config.disable_autoinit, Some(false));
    /// ```
    pub fn merge(&mut self, source: &Self) {
        if source.maximum_lock_wait_seconds.is_some() {
            self.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }
        if source.disable_autoinit.is_some() {
            self.disable_autoinit = source.disable_autoinit;
        }
        if source.output_format.is_some() {
            self.output_format = source.output_format;
        }
    }

    /// Checks the values for consistency.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the lock wait is zero.
    pub fn validate(&self) -> Result<()> {
        if self.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// The lock wait as a duration, falling back to the default.
    #[must_use]
    pub fn lock_wait(&self) -> Duration {
        Duration::from_secs(
            self.maximum_lock_wait_seconds
                .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS),
        )
    }

    /// Whether implicit database creation is disabled.
    #[must_use]
    pub fn autoinit_disabled(&self) -> bool {
        self.disable_autoinit.unwrap_or(false)
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use chargebook::config::OutputFormat;
///
/// assert_eq!(OutputFormat::Json.to_string(), "json");
/// assert_eq!(OutputFormat::parse("TSV").unwrap(), OutputFormat::Tsv);
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
    /// CSV output format.
    Csv,
    /// TSV output format.
    Tsv,
}

impl OutputFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error for unknown names.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            "tsv" => Ok(Self::Tsv),
            _ => Err(Error::Validation {
                field: "output_format".into(),
                message: format!("unknown output format '{value}' (expected table/json/csv/tsv)"),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
            Self::Csv => write!(f, "csv"),
            Self::Tsv => write!(f, "tsv"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = "maximum_lock_wait_seconds: 12\ndisable_autoinit: true\noutput_format: csv\n";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config,
            Config {
                maximum_lock_wait_seconds: Some(12),
                disable_autoinit: Some(true),
                output_format: Some(OutputFormat::Csv),
            }
        );
    }

    #[test]
    fn test_merge_none_preserves_existing() {
        let mut config = Config::with_defaults();
        config.merge(&Config::default());
        assert_eq!(config, Config::with_defaults());
    }

    #[test]
    fn test_merge_overwrites() {
        let mut config = Config::with_defaults();
        config.merge(&Config {
            disable_autoinit: Some(true),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        });
        assert_eq!(config.maximum_lock_wait_seconds, Some(DEFAULT_LOCK_WAIT_SECONDS));
        assert!(config.autoinit_disabled());
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_validate_zero_lock_wait() {
        let config = Config {
            maximum_lock_wait_seconds: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Validation { field, .. }) if field == "maximum_lock_wait_seconds"
        ));
        assert!(Config::with_defaults().validate().is_ok());
    }

    #[test]
    fn test_lock_wait_default() {
        assert_eq!(Config::default().lock_wait(), Duration::from_secs(5));
        let config = Config {
            maximum_lock_wait_seconds: Some(9),
            ..Default::default()
        };
        assert_eq!(config.lock_wait(), Duration::from_secs(9));
    }

    #[test]
    fn test_output_format_parse_rejects_unknown() {
        assert!(OutputFormat::parse("xml").is_err());
        assert_eq!(OutputFormat::parse("Table").unwrap(), OutputFormat::Table);
    }

    #[test]
    fn test_output_format_serde_lowercase() {
        let yaml = serde_yaml::to_string(&OutputFormat::Tsv).unwrap();
        assert_eq!(yaml.trim(), "tsv");
    }

    #[cfg(feature = "property-tests")]
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn config_strategy() -> impl Strategy<Value = Config> {
            (
                proptest::option::of(1u64..3600),
                proptest::option::of(any::<bool>()),
                proptest::option::of(prop_oneof![
                    Just(OutputFormat::Table),
                    Just(OutputFormat::Json),
                    Just(OutputFormat::Csv),
                    Just(OutputFormat::Tsv),
                ]),
            )
                .prop_map(|(wait, autoinit, format)| Config {
                    maximum_lock_wait_seconds: wait,
                    disable_autoinit: autoinit,
                    output_format: format,
                })
        }

        proptest! {
            #[test]
            fn prop_merge_empty_is_identity(config in config_strategy()) {
                let mut merged = config.clone();
                merged.merge(&Config::default());
                prop_assert_eq!(merged, config);
            }

            #[test]
            fn prop_merge_into_empty_copies(config in config_strategy()) {
                let mut merged = Config::default();
                merged.merge(&config);
                prop_assert_eq!(merged, config);
            }

            #[test]
            fn prop_yaml_roundtrip(config in config_strategy()) {
                let yaml = serde_yaml::to_string(&config).unwrap();
                let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
                prop_assert_eq!(parsed, config);
            }
        }
    }
}
