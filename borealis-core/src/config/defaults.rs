//! Default configuration values for Borealis Core.
//!
//! These functions back `serde`'s `default` attributes in the configuration
//! structures, providing sensible values for fields absent from the
//! configuration file.

use std::path::PathBuf;

/// Returns the default log level string (`"info"`).
pub(super) fn default_log_level() -> String {
    "info".to_string()
}

/// Returns the default log file path (`None`, file logging disabled).
pub(super) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// Returns the default log format string (`"text"`).
pub(super) fn default_log_format() -> String {
    "text".to_string()
}

/// Returns the default bound on locally retained error records.
pub(super) fn default_max_stored_errors() -> usize {
    50
}

/// Returns the default storage key for the persisted error history.
pub(super) fn default_error_storage_key() -> String {
    "error_history.json".to_string()
}

/// Returns a default boolean value of `false`.
pub(super) fn default_bool_false() -> bool {
    false
}
