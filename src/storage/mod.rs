//! Durable key-value storage for sessions and history.
//!
//! The web edition of this app kept everything in `localStorage`; here the
//! same contract is a small port with two backends:
//! - [`FileStore`]: one JSON file per key under the app data directory
//! - [`MemoryStore`]: in-memory map for tests
//!
//! Concurrent writers (a second instance sharing the same directory) are
//! not coordinated; the last write wins.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::utils::{AppError, AppResult};

/// Storage key for the persisted session identity.
pub const SESSION_KEY: &str = "session_identity";

/// Storage key for one identity's history list.
pub fn history_key(identity_id: &str) -> String {
    format!("history_{identity_id}")
}

/// Key-value storage port.
///
/// Keys are short identifiers, values serialized JSON. `get` treats
/// unreadable entries as absent; only writes surface errors.
pub trait StorageBackend: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove(&self, key: &str) -> AppResult<()>;
}

/// File-backed storage: each key maps to `<key>.json` in the root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> AppResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            AppError::storage(format!(
                "Failed to create storage directory {}: {e}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key);
        if !path.exists() {
            return None;
        }
        match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) => {
                warn!("Failed to read storage entry {key}: {e}");
                None
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let final_path = self.entry_path(key);
        let temp_path = self.root.join(format!("{key}.json.tmp.{}", std::process::id()));

        // Temp file + fsync + rename so a crash mid-write cannot leave a
        // truncated entry behind.
        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| AppError::storage(format!("Failed to write {key}: {e}")))?;
            file.write_all(value.as_bytes())
                .map_err(|e| AppError::storage(format!("Failed to write {key}: {e}")))?;
            file.sync_all()
                .map_err(|e| AppError::storage(format!("Failed to write {key}: {e}")))?;
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            AppError::storage(format!("Failed to persist {key}: {e}"))
        })?;

        debug!("Persisted storage entry {key}");
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let path = self.entry_path(key);
        if !path.exists() {
            return Ok(());
        }
        fs::remove_file(&path)
            .map_err(|e| AppError::storage(format!("Failed to remove {key}: {e}")))
    }
}

/// In-memory storage used by unit tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}
