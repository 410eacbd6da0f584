//! XDG Base Directory and Application-Specific Path Resolution.
//!
//! Utility functions for resolving standard directory paths according to the
//! XDG Base Directory Specification and for constructing Borealis-specific
//! paths. Relies on the `directories` crate.
//!
//! All functions return `Result<PathBuf, CoreError>`, yielding
//! [`CoreError::Config(ConfigError::DirectoryUnavailable)`] when a required
//! directory cannot be determined (e.g. when HOME is not set).

use crate::error::{ConfigError, CoreError};
use directories::{BaseDirs, ProjectDirs};
use std::path::PathBuf;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "Borealis";
const APPLICATION: &str = "Borealis";

fn project_dirs() -> Result<ProjectDirs, CoreError> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION).ok_or_else(|| {
        CoreError::Config(ConfigError::DirectoryUnavailable {
            dir_type: "Project".to_string(),
        })
    })
}

/// Returns the base directory for user-specific configuration files.
///
/// Typically `$XDG_CONFIG_HOME` on Linux (e.g. `~/.config`).
pub fn get_config_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "Config Base".to_string(),
            })
        })
}

/// Returns the base directory for user-specific data files.
///
/// Typically `$XDG_DATA_HOME` on Linux (e.g. `~/.local/share`).
pub fn get_data_base_dir() -> Result<PathBuf, CoreError> {
    BaseDirs::new()
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            CoreError::Config(ConfigError::DirectoryUnavailable {
                dir_type: "Data Base".to_string(),
            })
        })
}

/// Returns the application-specific configuration directory,
/// e.g. `~/.config/borealis` on Linux.
pub fn get_app_config_dir() -> Result<PathBuf, CoreError> {
    Ok(project_dirs()?.config_dir().to_path_buf())
}

/// Returns the application-specific data directory,
/// e.g. `~/.local/share/borealis` on Linux. This is where the error store's
/// filesystem backend keeps its files by default.
pub fn get_app_data_dir() -> Result<PathBuf, CoreError> {
    Ok(project_dirs()?.data_dir().to_path_buf())
}

/// Returns the application-specific state directory used for log files.
///
/// Falls back to the data directory on platforms without a state dir.
pub fn get_app_state_dir() -> Result<PathBuf, CoreError> {
    let dirs = project_dirs()?;
    Ok(dirs
        .state_dir()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| dirs.data_dir().to_path_buf()))
}
