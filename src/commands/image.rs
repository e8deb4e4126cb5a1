//! Image workflow commands: select, process, save, export.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tauri::State;
use tracing::{debug, warn};

use crate::commands::notify;
use crate::core::AppState;
use crate::core::types::{HistoryRecord, NotificationKind};
use crate::processing::Completion;
use crate::utils::{AppError, AppResult, validate_image_path};

/// Response to a file selection.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedImage {
    /// Default name for a later save, derived from the file stem
    pub name: String,
    /// Absolute path of the selected file
    pub path: String,
}

/// Outcome of a save attempt.
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SaveOutcome {
    /// The record was appended to the active identity's history
    Saved { record: HistoryRecord },
    /// No active session; the frontend should prompt for login and retry
    AuthRequired,
}

/// Selects the source image for the next removal.
///
/// Discards any prior result; a removal already in flight for the
/// previous file will be dropped when it completes.
#[tauri::command]
pub async fn select_image(state: State<'_, AppState>, path: String) -> AppResult<SelectedImage> {
    let path = PathBuf::from(path);
    validate_image_path(&path)?;

    let mut job = state.job.lock().await;
    let name = job.select_file(path.clone()).to_string();
    Ok(SelectedImage {
        name,
        path: path.to_string_lossy().into_owned(),
    })
}

/// Runs the external removal call for the selected file.
///
/// Emits a success or error notification. A response that arrives after
/// the user has selected another file is dropped without touching state.
#[tauri::command]
pub async fn remove_background(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
) -> AppResult<String> {
    let (generation, input_path) = {
        let mut job = state.job.lock().await;
        job.begin()?
    };

    let file_name = input_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let outcome = run_removal(&state, &input_path, &file_name).await;
    let outcome_for_job = match &outcome {
        Ok(path) => Ok(path.clone()),
        Err(e) => Err(e.to_string()),
    };

    let mut job = state.job.lock().await;
    match job.complete(generation, outcome_for_job) {
        Completion::Stale => {
            debug!("Removal result for \"{file_name}\" discarded: job moved on");
            Err(AppError::state("Result discarded: another file was selected"))
        }
        Completion::Applied(_) => match outcome {
            Ok(result_path) => {
                notify(
                    &app,
                    NotificationKind::Success,
                    "Success!",
                    "Background removed successfully",
                );
                Ok(result_path.to_string_lossy().into_owned())
            }
            Err(e) => {
                warn!("Background removal failed: {e}");
                notify(
                    &app,
                    NotificationKind::Error,
                    "Error",
                    "Failed to remove background. Please try again.",
                );
                Err(e)
            }
        },
    }
}

/// Reads the input, calls the removal service, and materializes the
/// result as a PNG in the results directory.
async fn run_removal(state: &AppState, input_path: &Path, file_name: &str) -> AppResult<PathBuf> {
    let bytes = tokio::fs::read(input_path).await?;
    let result = state.remover.remove(bytes, file_name).await?;

    let stamp = chrono::Utc::now().timestamp_millis();
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image");
    let result_path = state.results_dir.join(format!("{stem}-{stamp}.png"));
    tokio::fs::write(&result_path, &result).await?;
    Ok(result_path)
}

/// Appends the processed result to the active identity's history.
///
/// With no active session this returns [`SaveOutcome::AuthRequired`] and
/// leaves history untouched; the frontend opens the login dialog.
#[tauri::command]
pub async fn save_to_history(
    app: tauri::AppHandle,
    state: State<'_, AppState>,
    name: Option<String>,
) -> AppResult<SaveOutcome> {
    let session = state.session.lock().await;
    let Some(identity) = session.current().cloned() else {
        return Ok(SaveOutcome::AuthRequired);
    };
    drop(session);

    let job = state.job.lock().await;
    let existing = state.ledger.load(&identity.id);
    let now = chrono::Utc::now();
    let record = job.build_record(
        name.as_deref().unwrap_or(""),
        &existing,
        now.timestamp_millis() as u64,
        now.to_rfc3339(),
    )?;
    drop(job);

    state.ledger.append(&identity.id, record.clone())?;
    notify(
        &app,
        NotificationKind::Success,
        "Saved!",
        "Image saved to your history",
    );
    Ok(SaveOutcome::Saved { record })
}

/// Copies the processed result to `destination` (the "download" action).
#[tauri::command]
pub async fn export_result(state: State<'_, AppState>, destination: String) -> AppResult<()> {
    let job = state.job.lock().await;
    let result_path = job
        .result_path()
        .map(Path::to_path_buf)
        .ok_or_else(|| AppError::state("No processed result to export"))?;
    drop(job);

    tokio::fs::copy(&result_path, &destination).await?;
    debug!("Exported result to {destination}");
    Ok(())
}
