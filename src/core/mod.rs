//! Core application types and state management.
//!
//! This module contains the fundamental types used throughout the application:
//! - [`AppState`]: Application state managed by Tauri
//! - [`SessionStore`] / [`CredentialRegistry`]: login, signup, logout
//! - [`HistoryLedger`]: per-identity processed-image log
//! - [`CompareSlider`]: before/after reveal boundary
//! - [`AppConfig`]: removal service settings

pub mod compare;
pub mod config;
pub mod history;
pub mod session;
mod state;
pub mod types;

pub use compare::{CompareSlider, PointerEvent};
pub use config::AppConfig;
pub use history::{HistoryLedger, next_record_id};
pub use session::{CredentialRegistry, SessionStore};
pub use state::AppState;
pub use types::{Credential, HistoryRecord, Identity, Notification, NotificationKind};
