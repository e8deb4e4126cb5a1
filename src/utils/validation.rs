//! Input validation for selected image files.

use std::path::Path;
use crate::utils::{AppError, AppResult};

/// Raster formats accepted for upload.
const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "bmp"];

/// Validates that the selected path points to an existing, supported image file.
pub fn validate_image_path(path: &Path) -> AppResult<()> {
    if !path.exists() {
        return Err(AppError::validation(
            format!("Input file does not exist: {}", path.display())
        ));
    }

    if !path.is_file() {
        return Err(AppError::validation(
            format!("Input path is not a file: {}", path.display())
        ));
    }

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| AppError::validation(
            format!("File has no extension: {}", path.display())
        ))?;

    if !SUPPORTED_EXTENSIONS.contains(&extension.as_str()) {
        return Err(AppError::validation(
            format!("Unsupported image format: {extension}")
        ));
    }

    Ok(())
}

/// Derives a display name from a file path by stripping the extension.
///
/// "cat.png" becomes "cat"; an empty stem falls back to "Untitled".
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .unwrap_or_else(|| "Untitled".to_string())
}
