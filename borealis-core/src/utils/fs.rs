//! Filesystem Utilities.
//!
//! Helper functions for the handful of filesystem operations the Borealis
//! crates need: ensuring a directory exists and reading/writing whole files.
//! All functions map `std::io::Error` into [`CoreError`].

use crate::error::CoreError;
use std::fs;
use std::path::Path;

/// Ensures that a directory exists at the given path.
///
/// If the path does not exist it is created, including any necessary parent
/// directories. If the path exists but is not a directory, an error is
/// returned.
pub fn ensure_dir_exists(path: &Path) -> Result<(), CoreError> {
    if path.exists() {
        if !path.is_dir() {
            Err(CoreError::Filesystem {
                message: "Path exists but is not a directory".to_string(),
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "Path exists but is not a directory",
                ),
            })
        } else {
            Ok(())
        }
    } else {
        fs::create_dir_all(path).map_err(|e| CoreError::Filesystem {
            message: "Failed to create directory".to_string(),
            path: path.to_path_buf(),
            source: e,
        })
    }
}

/// Reads the entire contents of a file into a string.
///
/// Convenience wrapper around `std::fs::read_to_string` mapping the error to
/// [`CoreError::Filesystem`]. A missing file surfaces as a `NotFound` I/O
/// source, which callers can detect via [`CoreError::is_not_found`].
pub fn read_file_to_string(path: &Path) -> Result<String, CoreError> {
    fs::read_to_string(path).map_err(|e| CoreError::Filesystem {
        message: "Failed to read file".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Writes a string to a file, creating parent directories as needed.
///
/// The write replaces any existing content at the path.
pub fn write_string_to_file(path: &Path, content: &str) -> Result<(), CoreError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir_exists(parent)?;
        }
    }
    fs::write(path, content).map_err(|e| CoreError::Filesystem {
        message: "Failed to write file".to_string(),
        path: path.to_path_buf(),
        source: e,
    })
}

/// Removes a file if it exists.
///
/// A missing file is not an error; any other failure maps to
/// [`CoreError::Filesystem`].
pub fn remove_file_if_exists(path: &Path) -> Result<(), CoreError> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(CoreError::Filesystem {
            message: "Failed to remove file".to_string(),
            path: path.to_path_buf(),
            source: e,
        }),
    }
}
