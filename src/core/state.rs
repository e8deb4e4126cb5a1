//! Application state management for Tauri.

use std::path::PathBuf;
use std::sync::Arc;

use tauri::Manager;
use tokio::sync::Mutex;
use tracing::debug;

use crate::core::compare::CompareSlider;
use crate::core::config::AppConfig;
use crate::core::history::HistoryLedger;
use crate::core::session::{CredentialRegistry, SessionStore};
use crate::processing::{BackgroundRemoval, HttpRemovalService, RemovalJob};
use crate::storage::{FileStore, StorageBackend};

/// Application state managed by Tauri.
///
/// Each interactive component sits behind its own lock; the removal
/// service handle is shared and immutable. The job mutex is the async
/// flavor because it is held across command await points.
pub struct AppState {
    pub session: Mutex<SessionStore>,
    pub ledger: HistoryLedger,
    pub job: Mutex<RemovalJob>,
    pub slider: std::sync::Mutex<CompareSlider>,
    pub remover: Arc<dyn BackgroundRemoval>,
    /// Directory processed result images are written to
    pub results_dir: PathBuf,
}

impl AppState {
    /// Creates the state from the app handle, wiring file-backed storage
    /// and the HTTP removal client from `config`.
    pub fn new(app: &tauri::AppHandle, config: &AppConfig) -> anyhow::Result<Self> {
        let app_data = app.path().app_data_dir()?;
        debug!("App data directory: {}", app_data.display());

        let storage: Arc<dyn StorageBackend> =
            Arc::new(FileStore::new(app_data.join("storage"))?);
        let results_dir = app_data.join("results");
        std::fs::create_dir_all(&results_dir)?;

        let remover: Arc<dyn BackgroundRemoval> = Arc::new(HttpRemovalService::new(config)?);

        Ok(Self::with_parts(storage, remover, results_dir))
    }

    /// Assembles the state from explicit parts.
    pub fn with_parts(
        storage: Arc<dyn StorageBackend>,
        remover: Arc<dyn BackgroundRemoval>,
        results_dir: PathBuf,
    ) -> Self {
        Self {
            session: Mutex::new(SessionStore::new(
                CredentialRegistry::with_demo_account(),
                storage.clone(),
            )),
            ledger: HistoryLedger::new(storage),
            job: Mutex::new(RemovalJob::new()),
            slider: std::sync::Mutex::new(CompareSlider::new()),
            remover,
            results_dir,
        }
    }
}
