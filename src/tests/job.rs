//! Removal job tests: phase transitions, staleness, record building.

use std::path::PathBuf;

use crate::core::types::HistoryRecord;
use crate::processing::{Completion, JobPhase, RemovalJob};
use crate::utils::AppError;

fn selected(path: &str) -> RemovalJob {
    let mut job = RemovalJob::new();
    job.select_file(PathBuf::from(path));
    job
}

fn succeeded(path: &str) -> RemovalJob {
    let mut job = selected(path);
    let (generation, _) = job.begin().unwrap();
    job.complete(generation, Ok(PathBuf::from("/results/out.png")));
    job
}

#[test]
fn starts_idle() {
    let job = RemovalJob::new();

    assert_eq!(job.phase(), JobPhase::Idle);
    assert!(job.input_path().is_none());
    assert!(job.result_path().is_none());
}

#[test]
fn select_derives_the_name_from_the_file_stem() {
    let job = selected("/images/cat.png");

    assert_eq!(job.phase(), JobPhase::FileSelected);
    assert_eq!(job.display_name(), "cat");
}

#[test]
fn selecting_again_discards_the_prior_result() {
    let mut job = succeeded("/images/cat.png");
    assert!(job.result_path().is_some());

    job.select_file(PathBuf::from("/images/dog.jpg"));

    assert_eq!(job.phase(), JobPhase::FileSelected);
    assert_eq!(job.display_name(), "dog");
    assert!(job.result_path().is_none());
}

#[test]
fn begin_requires_a_selected_file() {
    let mut job = RemovalJob::new();

    let err = job.begin().unwrap_err();

    assert!(matches!(err, AppError::State(_)));
    assert_eq!(job.phase(), JobPhase::Idle);
}

#[test]
fn begin_rejects_reentry_while_processing() {
    let mut job = selected("/images/cat.png");
    job.begin().unwrap();

    let err = job.begin().unwrap_err();

    assert!(matches!(err, AppError::State(_)));
    assert_eq!(job.phase(), JobPhase::Processing);
}

#[test]
fn successful_completion_moves_to_succeeded() {
    let mut job = selected("/images/cat.png");
    let (generation, input) = job.begin().unwrap();
    assert_eq!(input, PathBuf::from("/images/cat.png"));

    let applied = job.complete(generation, Ok(PathBuf::from("/results/cat-1.png")));

    assert_eq!(applied, Completion::Applied(JobPhase::Succeeded));
    assert_eq!(job.result_path(), Some(PathBuf::from("/results/cat-1.png").as_path()));
}

#[test]
fn failed_completion_moves_to_failed() {
    let mut job = selected("/images/cat.png");
    let (generation, _) = job.begin().unwrap();

    let applied = job.complete(generation, Err("connection refused".to_string()));

    assert_eq!(applied, Completion::Applied(JobPhase::Failed));
    assert!(job.result_path().is_none());
}

#[test]
fn a_late_response_after_a_new_selection_is_discarded() {
    let mut job = selected("/images/cat.png");
    let (generation, _) = job.begin().unwrap();

    // The user moves on while the call is in flight
    job.select_file(PathBuf::from("/images/dog.jpg"));

    let completion = job.complete(generation, Ok(PathBuf::from("/results/cat-1.png")));

    assert_eq!(completion, Completion::Stale);
    assert_eq!(job.phase(), JobPhase::FileSelected);
    assert!(job.result_path().is_none());
}

#[test]
fn reprocessing_after_failure_requires_reselection() {
    let mut job = selected("/images/cat.png");
    let (generation, _) = job.begin().unwrap();
    job.complete(generation, Err("boom".to_string()));

    assert!(job.begin().is_err());

    job.select_file(PathBuf::from("/images/cat.png"));
    assert!(job.begin().is_ok());
}

#[test]
fn build_record_requires_a_successful_removal() {
    let job = selected("/images/cat.png");

    let err = job.build_record("cat", &[], 1000, "2026-08-07T12:00:00+00:00".into());

    assert!(matches!(err.unwrap_err(), AppError::State(_)));
}

#[test]
fn the_default_name_flows_into_the_record() {
    let job = succeeded("/images/cat.png");

    let record = job
        .build_record(job.display_name(), &[], 1000, "2026-08-07T12:00:00+00:00".into())
        .unwrap();

    assert_eq!(record.name, "cat");
    assert_eq!(record.id, 1000);
    assert_eq!(record.original_image, "/images/cat.png");
    assert_eq!(record.result_image, "/results/out.png");
}

#[test]
fn a_blank_name_falls_back_to_untitled() {
    let job = succeeded("/images/cat.png");

    let record = job
        .build_record("   ", &[], 1000, "2026-08-07T12:00:00+00:00".into())
        .unwrap();

    assert_eq!(record.name, "Untitled");
}

#[test]
fn record_ids_avoid_existing_ones() {
    let job = succeeded("/images/cat.png");
    let existing = vec![HistoryRecord {
        id: 1000,
        name: "older".to_string(),
        original_image: "a".to_string(),
        result_image: "b".to_string(),
        date: "2026-08-07T11:00:00+00:00".to_string(),
    }];

    let record = job
        .build_record("cat", &existing, 1000, "2026-08-07T12:00:00+00:00".into())
        .unwrap();

    assert_eq!(record.id, 1001);
}
