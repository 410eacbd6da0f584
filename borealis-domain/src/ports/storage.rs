//! The on-device key-value storage port and its shipped implementations.

use async_trait::async_trait;
use borealis_core::utils::fs as core_fs;
use borealis_core::CoreError;
use std::collections::HashMap;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// String-keyed, string-valued persistent storage.
///
/// The error store serializes its whole history to JSON text under a single
/// key. Writes are last-writer-wins; there is no cross-process coordination.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value for `key`, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Writes `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: String) -> Result<(), CoreError>;

    /// Removes `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Ephemeral in-memory storage.
///
/// Useful for tests and for sessions that should not persist anything; data
/// is lost when the process exits.
#[derive(Default)]
pub struct InMemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        self.entries.write().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// Filesystem-backed storage mapping each key to one file under a base
/// directory.
///
/// Keys are treated as file names; the application data directory is the
/// conventional base (see `borealis_core::utils::paths::get_app_data_dir`).
pub struct FilesystemKeyValueStore {
    base_dir: PathBuf,
}

impl FilesystemKeyValueStore {
    /// Creates the store, ensuring the base directory exists.
    pub fn new(base_dir: PathBuf) -> Result<Self, CoreError> {
        core_fs::ensure_dir_exists(&base_dir)?;
        Ok(Self { base_dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(key)
    }
}

#[async_trait]
impl KeyValueStore for FilesystemKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        match core_fs::read_file_to_string(&self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        core_fs::write_string_to_file(&self.path_for(key), &value)
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        core_fs::remove_file_if_exists(&self.path_for(key))
    }
}
