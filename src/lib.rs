// Module declarations in dependency order
pub mod commands;
pub mod core;
pub mod processing;
pub mod storage;
pub mod utils;

#[cfg(test)]
mod tests;

// Public exports for external consumers
pub use crate::core::{AppConfig, AppState, CompareSlider, CredentialRegistry, HistoryLedger, PointerEvent, SessionStore};
pub use crate::core::types::{HistoryRecord, Identity, Notification, NotificationKind};
pub use crate::processing::{BackgroundRemoval, Completion, HttpRemovalService, JobPhase, RemovalJob};
pub use crate::storage::{FileStore, MemoryStore, StorageBackend};
pub use crate::utils::{AppError, AppResult};
pub use crate::commands::*;

// This library file is used as a public API for consuming this crate as a library.
// The actual application entry point is in main.rs.
