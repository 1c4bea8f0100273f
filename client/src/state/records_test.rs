use super::*;
use crate::net::types::{AnalyzeResult, Grade, MetricResult, TRACKED_METRICS};

// =============================================================
// Helpers
// =============================================================

fn make_record(id: i64) -> AnalysisRecord {
    let mut analyze_result = AnalyzeResult::default();
    for (key, _) in TRACKED_METRICS {
        analyze_result.metrics.insert(key.to_owned(), MetricResult { grade: Grade::Good });
    }
    AnalysisRecord {
        record_id: id,
        title: format!("record {id}"),
        created_at: "2024-11-02".to_owned(),
        analyze_result,
    }
}

fn make_page(ids: &[i64], total_pages: u32) -> AnalysisPage {
    AnalysisPage { content: ids.iter().copied().map(make_record).collect(), total_pages }
}

fn loaded(ids: &[i64], total_pages: u32) -> RecordsState {
    let mut state = RecordsState::default();
    let ticket = state.begin_fetch(1);
    state.finish_fetch(ticket, Ok(make_page(ids, total_pages)));
    state
}

fn ids(state: &RecordsState) -> Vec<i64> {
    state.records().iter().map(|r| r.record_id).collect()
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn records_state_defaults() {
    let state = RecordsState::default();
    assert!(state.page.is_none());
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.records().is_empty());
    assert_eq!(state.total_pages(), 0);
}

// =============================================================
// Fetch
// =============================================================

#[test]
fn begin_fetch_marks_loading_and_tracks_page() {
    let mut state = RecordsState::default();
    let ticket = state.begin_fetch(3);
    assert!(state.loading);
    assert_eq!(ticket.page(), 3);
    assert!(state.is_latest(ticket));
}

#[test]
fn begin_fetch_treats_page_zero_as_first_page() {
    let mut state = RecordsState::default();
    assert_eq!(state.begin_fetch(0).page(), 1);
}

#[test]
fn successful_fetch_replaces_page_and_total() {
    let mut state = loaded(&[1, 2], 4);
    let ticket = state.begin_fetch(2);
    let outcome = state.finish_fetch(ticket, Ok(make_page(&[11, 12, 13], 6)));
    assert_eq!(outcome, FetchOutcome::Applied);
    assert_eq!(ids(&state), vec![11, 12, 13]);
    assert_eq!(state.total_pages(), 6);
    assert!(!state.loading);
}

#[test]
fn failed_fetch_keeps_last_page_and_sets_error() {
    let mut state = loaded(&[1, 2], 4);
    let ticket = state.begin_fetch(2);
    let outcome = state.finish_fetch(ticket, Err(ApiError::Status(404)));
    assert_eq!(outcome, FetchOutcome::Failed);
    assert_eq!(ids(&state), vec![1, 2]);
    assert_eq!(state.total_pages(), 4);
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(FETCH_FAILED_MESSAGE));
}

#[test]
fn transient_fetch_failure_adds_retry_hint() {
    let mut state = RecordsState::default();
    let ticket = state.begin_fetch(1);
    state.finish_fetch(ticket, Err(ApiError::Network("offline".to_owned())));
    let error = state.error.unwrap();
    assert!(error.starts_with(FETCH_FAILED_MESSAGE));
    assert!(error.len() > FETCH_FAILED_MESSAGE.len());
}

#[test]
fn successful_fetch_clears_previous_error() {
    let mut state = RecordsState::default();
    let ticket = state.begin_fetch(1);
    state.finish_fetch(ticket, Err(ApiError::Status(500)));
    let ticket = state.begin_fetch(1);
    state.finish_fetch(ticket, Ok(make_page(&[1], 1)));
    assert!(state.error.is_none());
}

#[test]
fn late_response_for_earlier_page_is_discarded() {
    let mut state = RecordsState::default();
    let first = state.begin_fetch(1);
    let second = state.begin_fetch(2);

    let outcome = state.finish_fetch(second, Ok(make_page(&[21, 22], 3)));
    assert_eq!(outcome, FetchOutcome::Applied);

    let outcome = state.finish_fetch(first, Ok(make_page(&[1, 2], 3)));
    assert_eq!(outcome, FetchOutcome::Superseded);
    assert_eq!(ids(&state), vec![21, 22]);
}

#[test]
fn superseded_failure_does_not_touch_loading_or_error() {
    let mut state = RecordsState::default();
    let first = state.begin_fetch(1);
    let _second = state.begin_fetch(2);
    let outcome = state.finish_fetch(first, Err(ApiError::Status(500)));
    assert_eq!(outcome, FetchOutcome::Superseded);
    assert!(state.loading);
    assert!(state.error.is_none());
}

// =============================================================
// Empty notice
// =============================================================

#[test]
fn empty_page_shows_empty_notice() {
    let state = loaded(&[], 0);
    assert!(state.shows_empty_notice());
    assert_eq!(state.total_pages(), 0);
}

#[test]
fn never_fetched_state_shows_loading_not_empty_notice() {
    let state = RecordsState::default();
    assert!(!state.shows_empty_notice());
}

#[test]
fn failed_first_fetch_falls_back_to_empty_notice() {
    let mut state = RecordsState::default();
    let ticket = state.begin_fetch(1);
    state.finish_fetch(ticket, Err(ApiError::Status(500)));
    assert!(state.shows_empty_notice());
    assert_eq!(state.error.as_deref(), Some(format!("{FETCH_FAILED_MESSAGE}{RETRY_HINT}").as_str()));
}

#[test]
fn initial_load_does_not_flash_empty_notice() {
    let mut state = RecordsState::default();
    state.begin_fetch(1);
    assert!(!state.shows_empty_notice());
}

#[test]
fn non_empty_page_hides_empty_notice() {
    assert!(!loaded(&[1], 1).shows_empty_notice());
}

// =============================================================
// Delete
// =============================================================

#[test]
fn successful_delete_removes_only_that_record_in_order() {
    let mut state = loaded(&[1, 2, 3, 4], 2);
    assert!(state.begin_delete(3));
    assert!(state.finish_delete(3, Ok(())));
    assert_eq!(ids(&state), vec![1, 2, 4]);
}

#[test]
fn delete_keeps_stale_total_pages_until_next_fetch() {
    let mut state = loaded(&[1], 2);
    state.begin_delete(1);
    state.finish_delete(1, Ok(()));
    assert!(state.records().is_empty());
    assert_eq!(state.total_pages(), 2);
}

#[test]
fn failed_delete_keeps_record_and_sets_error() {
    let mut state = loaded(&[1, 2], 1);
    state.begin_delete(2);
    assert!(!state.finish_delete(2, Err(ApiError::Status(403))));
    assert_eq!(ids(&state), vec![1, 2]);
    assert_eq!(state.error.as_deref(), Some(DELETE_FAILED_MESSAGE));
    assert!(!state.is_deleting(2));
}

#[test]
fn duplicate_delete_is_rejected_while_in_flight() {
    let mut state = loaded(&[5], 1);
    assert!(state.begin_delete(5));
    assert!(state.is_deleting(5));
    assert!(!state.begin_delete(5));
    state.finish_delete(5, Ok(()));
    assert!(!state.is_deleting(5));
}

#[test]
fn remove_unknown_record_is_noop() {
    let mut state = loaded(&[1, 2], 1);
    assert!(!state.remove_record(99));
    assert_eq!(ids(&state), vec![1, 2]);
}

#[test]
fn remove_record_before_any_page_is_noop() {
    let mut state = RecordsState::default();
    assert!(!state.remove_record(1));
}
