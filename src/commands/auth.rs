//! Session commands: current session, login, signup, logout.

use tauri::State;
use tracing::debug;

use crate::commands::notify;
use crate::core::AppState;
use crate::core::types::{Identity, NotificationKind};
use crate::utils::AppResult;

/// Returns the active session identity, if any.
#[tauri::command]
pub async fn current_session(state: State<'_, AppState>) -> AppResult<Option<Identity>> {
    let session = state.session.lock().await;
    Ok(session.current().cloned())
}

/// Validates credentials and opens a session.
///
/// # Errors
/// `InvalidCredentials` when the email is unknown or the password does
/// not match; surfaced to the login dialog for a re-prompt.
#[tauri::command]
pub async fn login(
    state: State<'_, AppState>,
    email: String,
    password: String,
) -> AppResult<Identity> {
    debug!("Login attempt for {email}");
    let mut session = state.session.lock().await;
    session.login(&email, &password)
}

/// Registers a new account and opens a session for it.
///
/// # Errors
/// `EmailInUse` when an account with the same email (compared
/// case-insensitively) already exists.
#[tauri::command]
pub async fn signup(
    state: State<'_, AppState>,
    name: String,
    email: String,
    password: String,
) -> AppResult<Identity> {
    debug!("Signup attempt for {email}");
    let mut session = state.session.lock().await;
    session.signup(&name, &email, &password)
}

/// Ends the session. Always succeeds and tells the user.
#[tauri::command]
pub async fn logout(app: tauri::AppHandle, state: State<'_, AppState>) -> AppResult<()> {
    let mut session = state.session.lock().await;
    session.logout();
    drop(session);

    notify(
        &app,
        NotificationKind::Info,
        "Logged out",
        "You have been logged out successfully.",
    );
    Ok(())
}
