//! Error types for the background remover.
//!
//! Provides a single application error type using `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;
use serde::Serialize;

/// Main error type for the application.
///
/// All errors in the application are converted to this type before being
/// returned to the frontend, so every variant serializes to a display
/// string the UI can show directly.
#[derive(Error, Debug, Serialize)]
pub enum AppError {
    /// Login with an unknown email or a mismatched password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup with an email that already has an account
    #[error("Email already in use")]
    EmailInUse,

    /// The external removal call failed or returned a malformed response
    #[error("Removal error: {0}")]
    Removal(String),

    /// An operation was invoked in a phase that does not allow it
    #[error("State error: {0}")]
    State(String),

    /// Durable storage read/write failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Input validation failed
    #[error("Validation error: {0}")]
    Validation(String),

    /// File IO error
    #[error("IO error: {0}")]
    Io(String),
}

/// Convenience result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

// Helper methods for error creation
impl AppError {
    pub fn removal<T: Into<String>>(msg: T) -> Self {
        Self::Removal(msg.into())
    }

    pub fn state<T: Into<String>>(msg: T) -> Self {
        Self::State(msg.into())
    }

    pub fn storage<T: Into<String>>(msg: T) -> Self {
        Self::Storage(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        Self::Validation(msg.into())
    }
}

// Convert std::io::Error to AppError
impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
