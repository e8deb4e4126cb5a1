//! Tauri command handlers for the frontend.
//!
//! This module exposes commands that can be invoked from the webview:
//! - auth: [`current_session`], [`login`], [`signup`], [`logout`]
//! - image: [`select_image`], [`remove_background`], [`save_to_history`], [`export_result`]
//! - history: [`load_history`], [`delete_history_entry`]
//! - compare: [`compare_reset`], [`compare_pointer`]

mod auth;
mod compare;
mod history;
mod image;

pub use auth::*;
pub use compare::*;
pub use history::*;
pub use image::*;

use tauri::Emitter;

use crate::core::types::{Notification, NotificationKind};

/// Emits a fire-and-forget toast notification to the webview.
pub(crate) fn notify(app: &tauri::AppHandle, kind: NotificationKind, title: &str, message: &str) {
    let _ = app.emit(
        "notification",
        Notification {
            kind,
            title: title.to_string(),
            message: message.to_string(),
        },
    );
}
