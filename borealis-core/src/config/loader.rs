//! Configuration Loading for Borealis Core.
//!
//! [`ConfigLoader`] locates, parses, and validates the [`CoreConfig`]. The
//! configuration file is `config.toml` inside the application configuration
//! directory (see [`crate::utils::paths::get_app_config_dir`]); a missing
//! file yields the default configuration, while unreadable or invalid files
//! are reported as [`CoreError::Config`] values.
//!
//! # Usage
//!
//! ```rust,ignore
//! use borealis_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => {
//!         println!("Logging level: {}", config.logging.level);
//!     }
//!     Err(e) => {
//!         borealis_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

use std::fs;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::paths::get_app_config_dir;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const LOG_FORMATS: [&str; 2] = ["text", "json"];

/// Static namespace for configuration loading logic.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates the [`CoreConfig`] for the application.
    ///
    /// Steps:
    /// 1. Resolve `config.toml` inside the application configuration
    ///    directory.
    /// 2. Read it; a missing file produces the default configuration.
    /// 3. Parse the TOML content.
    /// 4. Validate the result via [`Self::validate_config`].
    pub fn load() -> Result<CoreConfig, CoreError> {
        let config_path = get_app_config_dir()?.join("config.toml");
        match fs::read_to_string(&config_path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                let config = CoreConfig::default();
                Self::validate_config(&config)?;
                Ok(config)
            }
            Err(e) => Err(CoreError::Config(ConfigError::ReadError {
                path: config_path,
                source: e,
            })),
        }
    }

    /// Loads and validates a configuration from an explicit file path.
    ///
    /// Unlike [`Self::load`], a missing file here is an error: the caller
    /// asked for this specific file.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(CoreError::Config(
                ConfigError::NotFound {
                    locations: vec![path.to_path_buf()],
                },
            )),
            Err(e) => Err(CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })),
        }
    }

    /// Parses and validates a configuration from TOML text.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let config: CoreConfig = toml::from_str(content)
            .map_err(|e| CoreError::Config(ConfigError::ParseError(e)))?;
        Self::validate_config(&config)?;
        Ok(config)
    }

    /// Validates a loaded configuration.
    ///
    /// Checks the log level and format against their allowed value sets and
    /// rejects a zero record bound for the error store.
    pub fn validate_config(config: &CoreConfig) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "Unknown log level '{}'; expected one of {:?}",
                config.logging.level, LOG_LEVELS
            ))));
        }

        let format = config.logging.format.to_lowercase();
        if !LOG_FORMATS.contains(&format.as_str()) {
            return Err(CoreError::Config(ConfigError::ValidationError(format!(
                "Unknown log format '{}'; expected one of {:?}",
                config.logging.format, LOG_FORMATS
            ))));
        }

        if config.error_center.max_stored_errors == 0 {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "error_center.max_stored_errors must be at least 1".to_string(),
            )));
        }

        if config.error_center.storage_key.trim().is_empty() {
            return Err(CoreError::Config(ConfigError::ValidationError(
                "error_center.storage_key must not be empty".to_string(),
            )));
        }

        Ok(())
    }
}
