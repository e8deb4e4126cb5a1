//! Per-identity history of processed images.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::core::types::HistoryRecord;
use crate::storage::{StorageBackend, history_key};
use crate::utils::{AppError, AppResult};

/// Append/delete log of processed-image records, keyed by identity id.
///
/// The list is stored newest-first and fully rewritten on every mutation;
/// switching identities switches the visible list wholesale.
pub struct HistoryLedger {
    storage: Arc<dyn StorageBackend>,
}

impl HistoryLedger {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        Self { storage }
    }

    /// Loads an identity's history, newest first.
    ///
    /// Absent or unparsable entries read as an empty list; corrupt history
    /// is never surfaced as an error.
    pub fn load(&self, identity_id: &str) -> Vec<HistoryRecord> {
        let key = history_key(identity_id);
        let Some(raw) = self.storage.get(&key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!("History entry {key} is unreadable ({e}), treating as empty");
                Vec::new()
            }
        }
    }

    /// Prepends `record` and persists the full list. Returns the new list.
    pub fn append(
        &self,
        identity_id: &str,
        record: HistoryRecord,
    ) -> AppResult<Vec<HistoryRecord>> {
        let mut records = self.load(identity_id);
        records.insert(0, record);
        self.persist(identity_id, &records)?;
        debug!("History for {identity_id} now holds {} records", records.len());
        Ok(records)
    }

    /// Removes the record with `id`, if present. Removing a missing id is
    /// a no-op, not an error.
    pub fn remove(&self, identity_id: &str, id: u64) -> AppResult<Vec<HistoryRecord>> {
        let mut records = self.load(identity_id);
        records.retain(|r| r.id != id);
        self.persist(identity_id, &records)?;
        Ok(records)
    }

    fn persist(&self, identity_id: &str, records: &[HistoryRecord]) -> AppResult<()> {
        let json = serde_json::to_string(records)
            .map_err(|e| AppError::storage(format!("Failed to serialize history: {e}")))?;
        self.storage.set(&history_key(identity_id), &json)
    }
}

/// Picks a time-derived record id that is unique within `records`.
///
/// Two saves inside the same millisecond would collide on the raw
/// timestamp; bump past any taken id so ids stay unique and monotonic.
pub fn next_record_id(records: &[HistoryRecord], now_ms: u64) -> u64 {
    let mut id = now_ms;
    while records.iter().any(|r| r.id == id) {
        id += 1;
    }
    id
}
