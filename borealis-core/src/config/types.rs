//! Configuration Data Structures for Borealis Core.
//!
//! These structs are populated by deserializing a TOML configuration file.
//! Missing fields fall back to the functions in [`super::defaults`], and
//! unknown fields are rejected via `#[serde(deny_unknown_fields)]`.
//!
//! # Key Structs
//! - [`CoreConfig`]: the root configuration structure.
//! - [`LoggingConfig`]: logging subsystem settings.
//! - [`ErrorCenterConfig`]: error store and reporting settings.
//! - [`ErrorTrackingConfig`]: Sentry settings for the tracking bridge.

use super::defaults;
use serde::Deserialize;
use std::path::PathBuf;

/// Configuration settings for the logging subsystem.
///
/// # Examples
///
/// ```
/// use borealis_core::config::LoggingConfig;
/// use std::path::PathBuf;
///
/// let default_log_config = LoggingConfig::default();
/// assert_eq!(default_log_config.level, "info");
/// assert_eq!(default_log_config.file_path, None);
/// assert_eq!(default_log_config.format, "text");
///
/// let toml_str = r#"
/// level = "debug"
/// file_path = "/var/log/borealis.log"
/// format = "json"
/// "#;
/// let log_config: LoggingConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(log_config.level, "debug");
/// assert_eq!(log_config.file_path, Some(PathBuf::from("/var/log/borealis.log")));
/// assert_eq!(log_config.format, "json");
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// The minimum log level to record.
    /// Valid values (case-insensitive): "trace", "debug", "info", "warn", "error".
    #[serde(default = "defaults::default_log_level")]
    pub level: String,
    /// Optional path to a file where logs should be written.
    /// If `None`, file logging is disabled.
    #[serde(default = "defaults::default_log_file_path")]
    pub file_path: Option<PathBuf>,
    /// The format for log messages written to a file.
    /// Valid values (case-insensitive): "text", "json".
    #[serde(default = "defaults::default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::default_log_level(),
            file_path: defaults::default_log_file_path(),
            format: defaults::default_log_format(),
        }
    }
}

/// Configuration for the error center: the bounded local error store and the
/// optional remote reporting path.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorCenterConfig {
    /// Maximum number of error records retained locally. Appending beyond
    /// this bound evicts the oldest records. Must be at least 1.
    #[serde(default = "defaults::default_max_stored_errors")]
    pub max_stored_errors: usize,
    /// Storage key under which the serialized error history is persisted.
    /// The filesystem backend maps this to a file name in the data dir.
    #[serde(default = "defaults::default_error_storage_key")]
    pub storage_key: String,
    /// Whether handled errors are forwarded to the remote reporter by
    /// default when the caller does not say otherwise.
    #[serde(default = "defaults::default_bool_false")]
    pub report_errors: bool,
}

impl Default for ErrorCenterConfig {
    fn default() -> Self {
        Self {
            max_stored_errors: defaults::default_max_stored_errors(),
            storage_key: defaults::default_error_storage_key(),
            report_errors: defaults::default_bool_false(),
        }
    }
}

/// Sentry settings consumed by [`crate::error_tracking`].
///
/// With `sentry_dsn` unset (or empty) the tracking bridge stays disabled and
/// every capture call is a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorTrackingConfig {
    /// Sentry DSN. `None` disables error tracking.
    #[serde(default)]
    pub sentry_dsn: Option<String>,
    /// Environment name reported with each event (e.g. "production").
    #[serde(default)]
    pub sentry_environment: Option<String>,
    /// Release name reported with each event.
    #[serde(default)]
    pub sentry_release: Option<String>,
}

/// Root configuration structure for the Borealis core system.
///
/// # Examples
///
/// ```
/// use borealis_core::config::CoreConfig;
///
/// let core_config = CoreConfig::default();
/// assert_eq!(core_config.logging.level, "info");
/// assert_eq!(core_config.error_center.max_stored_errors, 50);
///
/// let toml_str = r#"
/// [logging]
/// level = "warn"
///
/// [error_center]
/// max_stored_errors = 10
/// "#;
/// let loaded: CoreConfig = toml::from_str(toml_str).unwrap();
/// assert_eq!(loaded.logging.level, "warn");
/// assert_eq!(loaded.error_center.max_stored_errors, 10);
/// assert_eq!(loaded.logging.file_path, None);
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Configuration for the logging subsystem.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Configuration for the error center.
    #[serde(default)]
    pub error_center: ErrorCenterConfig,
    /// Configuration for the Sentry tracking bridge.
    #[serde(default)]
    pub error_tracking: ErrorTrackingConfig,
}
