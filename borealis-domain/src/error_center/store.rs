//! The bounded, persistent error log.

use super::errors::ErrorCenterError;
use super::types::ErrorRecord;
use crate::ports::KeyValueStore;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// Bounded append log of [`ErrorRecord`]s, most-recent-first, persisted as
/// JSON text under a single storage key.
///
/// The in-memory list is authoritative for the current session: a failed
/// storage write is reduced to a warning and the session continues, though
/// records appended after such a failure may not survive a restart.
pub struct ErrorStore {
    records: RwLock<VecDeque<ErrorRecord>>,
    storage: Arc<dyn KeyValueStore>,
    storage_key: String,
    max_records: usize,
}

impl ErrorStore {
    /// Opens the store, loading any persisted history.
    ///
    /// Never fails: a missing key yields an empty log, and a corrupt payload
    /// resets the log to empty with a warning. `max_records` is the retention
    /// bound; persisted histories longer than the bound are trimmed on load.
    pub async fn load(
        storage: Arc<dyn KeyValueStore>,
        storage_key: impl Into<String>,
        max_records: usize,
    ) -> Self {
        let storage_key = storage_key.into();
        let records = Self::load_history(storage.as_ref(), &storage_key, max_records).await;
        debug!(
            key = %storage_key,
            loaded = records.len(),
            "Error store opened"
        );
        Self {
            records: RwLock::new(records),
            storage,
            storage_key,
            max_records,
        }
    }

    /// Opens the store with the bound and storage key from the error-center
    /// configuration section.
    pub async fn from_config(
        storage: Arc<dyn KeyValueStore>,
        config: &borealis_core::ErrorCenterConfig,
    ) -> Self {
        Self::load(storage, config.storage_key.clone(), config.max_stored_errors).await
    }

    async fn load_history(
        storage: &dyn KeyValueStore,
        storage_key: &str,
        max_records: usize,
    ) -> VecDeque<ErrorRecord> {
        let payload = match storage.get(storage_key).await {
            Ok(Some(payload)) => payload,
            Ok(None) => return VecDeque::new(),
            Err(e) => {
                warn!(key = %storage_key, "Failed to read persisted error history: {}", e);
                return VecDeque::new();
            }
        };

        match serde_json::from_str::<Vec<ErrorRecord>>(&payload) {
            Ok(list) => {
                let mut records: VecDeque<ErrorRecord> = list.into();
                records.truncate(max_records);
                records
            }
            Err(e) => {
                warn!(
                    key = %storage_key,
                    "Persisted error history is corrupt, resetting to empty: {}", e
                );
                VecDeque::new()
            }
        }
    }

    /// Appends a record at the head, evicting the oldest records past the
    /// bound, and persists the full list.
    ///
    /// A persistence failure is logged and swallowed; the in-memory list has
    /// already been updated and stays authoritative for this session.
    pub async fn append(&self, record: ErrorRecord) {
        let snapshot = {
            let mut records = self.records.write().await;
            records.push_front(record);
            records.truncate(self.max_records);
            records.iter().cloned().collect::<Vec<_>>()
        };
        if let Err(e) = self.persist(&snapshot).await {
            warn!("Error history not persisted: {}", e);
        }
    }

    /// Returns a snapshot of the stored records, most-recent-first.
    pub async fn get_all(&self) -> Vec<ErrorRecord> {
        self.records.read().await.iter().cloned().collect()
    }

    /// Empties the log and persists the empty state.
    pub async fn clear(&self) {
        self.records.write().await.clear();
        if let Err(e) = self.persist(&[]).await {
            warn!("Cleared error history not persisted: {}", e);
        }
    }

    /// Number of records currently retained.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// The retention bound this store was opened with.
    pub fn max_records(&self) -> usize {
        self.max_records
    }

    async fn persist(&self, snapshot: &[ErrorRecord]) -> Result<(), ErrorCenterError> {
        let payload = serde_json::to_string(snapshot)
            .map_err(|e| ErrorCenterError::Serialization(e.to_string()))?;
        self.storage
            .set(&self.storage_key, payload)
            .await
            .map_err(|e| {
                ErrorCenterError::persistence(
                    "save_history",
                    "Failed to write error history",
                    e,
                )
            })
    }
}
