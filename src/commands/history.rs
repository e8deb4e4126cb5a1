//! History commands.
//!
//! Both commands require an active session; the webview shows the login
//! prompt instead of calling them when signed out.

use tauri::State;

use crate::core::AppState;
use crate::core::types::HistoryRecord;
use crate::utils::{AppError, AppResult};

/// Loads the active identity's history, newest first.
#[tauri::command]
pub async fn load_history(state: State<'_, AppState>) -> AppResult<Vec<HistoryRecord>> {
    let session = state.session.lock().await;
    let identity = session
        .current()
        .ok_or_else(|| AppError::state("No active session"))?;
    Ok(state.ledger.load(&identity.id))
}

/// Deletes one record by id and returns the remaining list.
///
/// Unknown ids are a no-op.
#[tauri::command]
pub async fn delete_history_entry(
    state: State<'_, AppState>,
    id: u64,
) -> AppResult<Vec<HistoryRecord>> {
    let session = state.session.lock().await;
    let identity = session
        .current()
        .ok_or_else(|| AppError::state("No active session"))?;
    state.ledger.remove(&identity.id, id)
}
