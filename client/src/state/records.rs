//! Record-list state for the analysis list page.
//!
//! DESIGN
//! ======
//! The page owns one `RecordsState` signal. Fetches and deletes are split into
//! `begin_*` / `finish_*` halves so the async glue in the page stays thin and
//! every state transition is testable without a browser.
//!
//! Each fetch takes a `FetchTicket`; only the most recent ticket may apply its
//! response, so a slow earlier page can never overwrite a later one. Deletes
//! are tracked per record id so a double activation issues one request.

#[cfg(test)]
#[path = "records_test.rs"]
mod records_test;

use std::collections::BTreeSet;

use crate::net::error::ApiError;
use crate::net::types::{AnalysisPage, AnalysisRecord};

pub const FETCH_FAILED_MESSAGE: &str = "분석 목록을 불러오지 못했습니다.";
pub const DELETE_FAILED_MESSAGE: &str = "기록을 삭제하지 못했습니다.";
const RETRY_HINT: &str = " 잠시 후 다시 시도해 주세요.";

/// Handle identifying one page request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    page: u32,
}

impl FetchTicket {
    pub fn page(self) -> u32 {
        self.page
    }
}

/// What happened when a fetch result was applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    Failed,
    /// A newer request was issued after this one; the result was dropped.
    Superseded,
}

/// State backing the analysis list page.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordsState {
    /// Last successfully fetched page, possibly filtered by local deletes.
    pub page: Option<AnalysisPage>,
    /// A fetch is pending or in flight. Starts `true` so the first render
    /// (server and hydration alike) shows the loading notice.
    pub loading: bool,
    /// Inline error shown above the list.
    pub error: Option<String>,
    generation: u64,
    deleting: BTreeSet<i64>,
}

impl Default for RecordsState {
    fn default() -> Self {
        Self {
            page: None,
            loading: true,
            error: None,
            generation: 0,
            deleting: BTreeSet::new(),
        }
    }
}

impl RecordsState {
    /// Records currently displayed.
    pub fn records(&self) -> &[AnalysisRecord] {
        self.page.as_ref().map(|p| p.content.as_slice()).unwrap_or_default()
    }

    /// Page count reported by the last successful fetch.
    pub fn total_pages(&self) -> u32 {
        self.page.as_ref().map_or(0, |p| p.total_pages)
    }

    /// Whether the empty-state notice should replace the list.
    pub fn shows_empty_notice(&self) -> bool {
        self.records().is_empty() && !(self.loading && self.page.is_none())
    }

    /// Start a request for `page` (1-based). Any earlier in-flight request is
    /// superseded.
    pub fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        self.generation += 1;
        self.loading = true;
        FetchTicket { generation: self.generation, page: page.max(1) }
    }

    pub fn is_latest(&self, ticket: FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply the result of the request identified by `ticket`.
    ///
    /// Success replaces the page wholesale and clears the error. Failure keeps
    /// the last page on screen and records an error message.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: Result<AnalysisPage, ApiError>) -> FetchOutcome {
        if !self.is_latest(ticket) {
            return FetchOutcome::Superseded;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.page = Some(page);
                self.error = None;
                FetchOutcome::Applied
            }
            Err(err) => {
                self.error = Some(failure_message(FETCH_FAILED_MESSAGE, &err));
                FetchOutcome::Failed
            }
        }
    }

    /// Mark `record_id` as being deleted.
    ///
    /// Returns `false` if a delete for the same id is already in flight, in
    /// which case no request should be issued.
    pub fn begin_delete(&mut self, record_id: i64) -> bool {
        self.deleting.insert(record_id)
    }

    pub fn is_deleting(&self, record_id: i64) -> bool {
        self.deleting.contains(&record_id)
    }

    /// Apply the result of a remote delete. Returns `true` if a record was
    /// removed from the page.
    pub fn finish_delete(&mut self, record_id: i64, result: Result<(), ApiError>) -> bool {
        self.deleting.remove(&record_id);
        match result {
            Ok(()) => self.remove_record(record_id),
            Err(err) => {
                self.error = Some(failure_message(DELETE_FAILED_MESSAGE, &err));
                false
            }
        }
    }

    /// Drop a record from the displayed page, keeping the order of the rest.
    ///
    /// `total_pages` is left untouched until the next fetch.
    pub fn remove_record(&mut self, record_id: i64) -> bool {
        let Some(page) = self.page.as_mut() else {
            return false;
        };
        let before = page.content.len();
        page.content.retain(|r| r.record_id != record_id);
        page.content.len() != before
    }
}

fn failure_message(base: &str, err: &ApiError) -> String {
    if err.is_transient() {
        format!("{base}{RETRY_HINT}")
    } else {
        base.to_owned()
    }
}
