//! Comparison slider commands.
//!
//! The webview forwards raw pointer input (mouse and touch alike) along
//! with the container's measured width; the position comes back as the
//! percentage width of the "after" layer.

use tauri::State;

use crate::core::{AppState, PointerEvent};
use crate::utils::{AppError, AppResult};

/// Resets the slider, as on a fresh mount of the compare view.
#[tauri::command]
pub fn compare_reset(state: State<'_, AppState>) -> AppResult<f64> {
    let mut slider = state
        .slider
        .lock()
        .map_err(|_| AppError::state("Slider lock poisoned"))?;
    slider.reset();
    Ok(slider.position())
}

/// Feeds one pointer event and returns the updated position.
#[tauri::command]
pub fn compare_pointer(
    state: State<'_, AppState>,
    event: PointerEvent,
    width: f64,
) -> AppResult<f64> {
    let mut slider = state
        .slider
        .lock()
        .map_err(|_| AppError::state("Slider lock poisoned"))?;
    Ok(slider.handle(event, width))
}
