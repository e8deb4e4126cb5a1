//! Upload/process orchestration.
//!
//! One [`RemovalJob`] per app instance tracks the image currently being
//! worked on: which file is selected, whether a removal call is in
//! flight, and the latest result. Completions carry a generation token so
//! a response that arrives after the user has moved on is dropped instead
//! of applied.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::core::history::next_record_id;
use crate::core::types::HistoryRecord;
use crate::utils::{AppError, AppResult, display_name};

/// Phase of the current job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum JobPhase {
    Idle,
    FileSelected,
    Processing,
    Succeeded,
    Failed,
}

/// What happened to a completion attempt.
#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    /// The outcome was applied; the job is now in the contained phase
    Applied(JobPhase),
    /// The job moved on while the call was in flight; outcome dropped
    Stale,
}

/// State machine driving select → process → save.
pub struct RemovalJob {
    phase: JobPhase,
    input_path: Option<PathBuf>,
    display_name: String,
    result_path: Option<PathBuf>,
    generation: u64,
}

impl RemovalJob {
    pub fn new() -> Self {
        Self {
            phase: JobPhase::Idle,
            input_path: None,
            display_name: String::new(),
            result_path: None,
            generation: 0,
        }
    }

    pub fn phase(&self) -> JobPhase {
        self.phase
    }

    /// Default name for a later save, derived from the selected file.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn input_path(&self) -> Option<&Path> {
        self.input_path.as_deref()
    }

    pub fn result_path(&self) -> Option<&Path> {
        self.result_path.as_deref()
    }

    /// Selects a new source file, deriving its display name from the file
    /// stem and discarding any prior result.
    ///
    /// Allowed from every phase; selecting while a removal is in flight
    /// invalidates that call's generation, so its late response is
    /// dropped on arrival.
    pub fn select_file(&mut self, path: PathBuf) -> &str {
        self.generation += 1;
        self.display_name = display_name(&path);
        debug!("Selected {} as \"{}\"", path.display(), self.display_name);
        self.input_path = Some(path);
        self.result_path = None;
        self.phase = JobPhase::FileSelected;
        &self.display_name
    }

    /// Starts processing the selected file.
    ///
    /// Returns the generation token and input path so the caller can run
    /// the removal call without holding the job lock. At most one call
    /// may be in flight; re-entry is rejected.
    pub fn begin(&mut self) -> AppResult<(u64, PathBuf)> {
        match self.phase {
            JobPhase::FileSelected => {}
            JobPhase::Processing => {
                return Err(AppError::state("A removal is already in progress"));
            }
            _ => {
                return Err(AppError::state("Select a file to process first"));
            }
        }
        let path = self
            .input_path
            .clone()
            .ok_or_else(|| AppError::state("Select a file to process first"))?;
        self.phase = JobPhase::Processing;
        Ok((self.generation, path))
    }

    /// Applies the outcome of a removal call started with `generation`.
    ///
    /// A mismatched generation means the user selected another file while
    /// the call was in flight: the outcome is discarded. Failure keeps
    /// the previous result reference, if any.
    pub fn complete(&mut self, generation: u64, outcome: Result<PathBuf, String>) -> Completion {
        if generation != self.generation || self.phase != JobPhase::Processing {
            debug!("Dropping stale removal outcome (generation {generation})");
            return Completion::Stale;
        }
        match outcome {
            Ok(result) => {
                self.result_path = Some(result);
                self.phase = JobPhase::Succeeded;
            }
            Err(reason) => {
                debug!("Removal failed: {reason}");
                self.phase = JobPhase::Failed;
            }
        }
        Completion::Applied(self.phase)
    }

    /// Builds the history record for the current result.
    ///
    /// Only valid once a removal has succeeded. A blank `name` falls back
    /// to "Untitled"; `existing` is consulted so the time-derived id
    /// stays unique within the list.
    pub fn build_record(
        &self,
        name: &str,
        existing: &[HistoryRecord],
        now_ms: u64,
        date: String,
    ) -> AppResult<HistoryRecord> {
        if self.phase != JobPhase::Succeeded {
            return Err(AppError::state("No processed result to save"));
        }
        let (input, result) = match (&self.input_path, &self.result_path) {
            (Some(input), Some(result)) => (input, result),
            _ => return Err(AppError::state("No processed result to save")),
        };
        let name = name.trim();
        let name = if name.is_empty() { "Untitled" } else { name };
        Ok(HistoryRecord {
            id: next_record_id(existing, now_ms),
            name: name.to_string(),
            original_image: input.to_string_lossy().into_owned(),
            result_image: result.to_string_lossy().into_owned(),
            date,
        })
    }
}

impl Default for RemovalJob {
    fn default() -> Self {
        Self::new()
    }
}
