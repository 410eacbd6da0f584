//! Error handling for the Borealis core layer.
//!
//! This module defines the error types shared by the infrastructure code in
//! this crate and by the outbound ports of the domain layer. The main type is
//! [`CoreError`], which wraps the more specific [`ConfigError`].
//!
//! # Examples
//!
//! ```rust,ignore
//! use borealis_core::error::CoreError;
//!
//! fn do_something_risky() -> Result<(), CoreError> {
//!     // ... some operation ...
//!     Ok(())
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the Borealis libraries.
///
/// This enum represents all failures the core layer can produce. It is also
/// the error currency of the domain layer's outbound ports (storage and
/// reporting), so collaborator implementations outside this workspace return
/// it as well.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    /// Wraps a [`ConfigError`].
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors that occur during the initialization of the logging system.
    #[error("Logging Initialization Failed: {0}")]
    LoggingInitialization(String),

    /// Errors related to filesystem operations, such as creating directories
    /// or reading files. Includes the path involved and the source I/O error.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// General I/O errors not covered by other specific variants.
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors due to invalid input provided to a function or method.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),

    /// Catch-all for unexpected internal errors within the core library.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}

impl CoreError {
    /// Returns `true` when the error denotes a missing file or directory.
    ///
    /// Storage collaborators surface "key not present" this way, and callers
    /// such as the error store treat it as an empty-but-valid state rather
    /// than a failure.
    pub fn is_not_found(&self) -> bool {
        match self {
            CoreError::Io(source) => source.kind() == std::io::ErrorKind::NotFound,
            CoreError::Filesystem { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}

/// Error type for configuration-related operations.
///
/// Represents errors that can occur during configuration loading, parsing,
/// or access. Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An error occurred while attempting to read a configuration file.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An error occurred while parsing a configuration file (invalid TOML).
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but contained invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A configuration file was not found at any of the expected locations.
    #[error("Configuration file not found at expected locations: {locations:?}")]
    NotFound { locations: Vec<PathBuf> },

    /// A required base directory (e.g. XDG config/data home) could not be
    /// determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_core_error_config_variant() {
        let original = ConfigError::ValidationError("Test validation".to_string());
        let core_err = CoreError::Config(original);

        assert_eq!(
            format!("{}", core_err),
            "Configuration Error: Configuration validation failed: Test validation"
        );
        assert!(core_err.source().is_some());
        match core_err.source().unwrap().downcast_ref::<ConfigError>() {
            Some(ConfigError::ValidationError(msg)) => assert_eq!(msg, "Test validation"),
            _ => panic!("Incorrect source for CoreError::Config"),
        }
    }

    #[test]
    fn test_core_error_filesystem_variant() {
        let path = PathBuf::from("/tmp/test.txt");
        let io_err = IoError::new(ErrorKind::PermissionDenied, "Permission denied");
        let core_err = CoreError::Filesystem {
            message: "File operation failed".to_string(),
            path: path.clone(),
            source: io_err,
        };

        assert_eq!(
            format!("{}", core_err),
            format!("Filesystem Error: File operation failed (Path: {:?})", path)
        );
        assert_eq!(
            core_err
                .source()
                .unwrap()
                .downcast_ref::<IoError>()
                .unwrap()
                .kind(),
            ErrorKind::PermissionDenied
        );
    }

    #[test]
    fn test_core_error_io_not_found_detection() {
        let not_found = CoreError::Io(IoError::new(ErrorKind::NotFound, "missing"));
        let denied = CoreError::Io(IoError::new(ErrorKind::PermissionDenied, "denied"));
        assert!(not_found.is_not_found());
        assert!(!denied.is_not_found());
        assert!(!CoreError::Internal("x".to_string()).is_not_found());
    }

    #[test]
    fn test_core_error_filesystem_not_found_detection() {
        let err = CoreError::Filesystem {
            message: "read failed".to_string(),
            path: PathBuf::from("/nope"),
            source: IoError::new(ErrorKind::NotFound, "missing"),
        };
        assert!(err.is_not_found());
    }

    #[test]
    fn test_config_error_parse_error_variant() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("not valid = = toml")
            .unwrap_err();
        let toml_err_display = format!("{}", toml_err);

        let config_err = ConfigError::ParseError(toml_err);
        assert_eq!(
            format!("{}", config_err),
            format!("Failed to parse configuration file: {}", toml_err_display)
        );
        assert!(config_err.source().unwrap().is::<toml::de::Error>());
    }

    #[test]
    fn test_config_error_not_found_variant() {
        let locations = vec![PathBuf::from("/path/1"), PathBuf::from("/path/2")];
        let config_err = ConfigError::NotFound {
            locations: locations.clone(),
        };
        assert_eq!(
            format!("{}", config_err),
            format!(
                "Configuration file not found at expected locations: {:?}",
                locations
            )
        );
        assert!(config_err.source().is_none());
    }

    #[test]
    fn test_config_error_directory_unavailable_variant() {
        let config_err = ConfigError::DirectoryUnavailable {
            dir_type: "XDG_CONFIG_HOME".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Could not determine base directory for XDG_CONFIG_HOME"
        );
    }
}
