//! Core types for accounts, history records and notifications.

use serde::{Deserialize, Serialize};

/// Public, password-free profile of a signed-in user.
///
/// This is the shape persisted to durable storage and handed to the
/// frontend; passwords never leave the credential registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Unique user id
    pub id: String,
    /// Display name
    pub name: String,
    /// Email address (unique, compared case-insensitively)
    pub email: String,
    /// Optional avatar image reference
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Private login record: an [`Identity`] plus its plaintext password.
///
/// Held in memory for the lifetime of the process only, used solely to
/// validate login attempts.
#[derive(Debug, Clone)]
pub struct Credential {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub avatar: Option<String>,
}

impl Credential {
    /// Derives the public identity, dropping the password.
    pub fn identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

/// One saved (original, result) image pair with metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Time-derived id, unique within the owning identity's list
    pub id: u64,
    /// User-facing name
    pub name: String,
    /// Reference to the uploaded source image
    pub original_image: String,
    /// Reference to the processed result image
    pub result_image: String,
    /// RFC 3339 creation timestamp
    pub date: String,
}

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

/// Toast payload emitted fire-and-forget on the `notification` event channel.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
}
