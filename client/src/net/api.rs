//! REST API helpers for the voice-analysis record service.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. Callers decide whether to log,
//! surface, or ignore a failure; nothing here panics or swallows errors.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::collections::HashSet;

use super::error::ApiError;
use super::types::{AnalysisPage, ApiEnvelope, TRACKED_METRICS};

/// Base path of the record service as seen from the browser.
///
/// Defaults to `/api`, which the host forwards to the upstream backend.
pub const API_BASE: &str = match option_env!("VOICELAB_API_BASE") {
    Some(base) => base,
    None => "/api",
};

/// Fixed number of records requested per page.
pub const RECORD_PAGE_SIZE: u32 = 10;

/// Convert a 1-based UI page number to the backend's 0-based index.
///
/// Page `0` is treated as the first page.
pub fn zero_based_page_index(page: u32) -> u32 {
    page.max(1) - 1
}

#[cfg(any(test, feature = "hydrate"))]
fn record_page_endpoint(base: &str, page: u32) -> String {
    let index = zero_based_page_index(page);
    format!("{base}/record?page={index}&size={RECORD_PAGE_SIZE}")
}

#[cfg(any(test, feature = "hydrate"))]
fn record_endpoint(base: &str, record_id: i64) -> String {
    format!("{base}/record/{record_id}")
}

/// Parse and validate a `GET /record` response body.
///
/// # Errors
///
/// Returns `ApiError::Malformed` if the body is not a `{ "data": AnalysisPage }`
/// envelope, repeats a record id, or a record lacks one of the tracked metrics.
pub fn parse_record_page(body: &str) -> Result<AnalysisPage, ApiError> {
    let envelope: ApiEnvelope<AnalysisPage> =
        serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
    let page = envelope.data;

    let mut seen = HashSet::with_capacity(page.content.len());
    for record in &page.content {
        if !seen.insert(record.record_id) {
            return Err(ApiError::Malformed(format!("duplicate record id {}", record.record_id)));
        }
        for (key, _) in TRACKED_METRICS {
            if record.analyze_result.metric(key).is_none() {
                return Err(ApiError::Malformed(format!("record {} is missing metric {key}", record.record_id)));
            }
        }
    }
    Ok(page)
}

/// Fetch one page of analysis records from `GET /record`.
///
/// `page` is 1-based; the request uses the 0-based index and a page size of
/// [`RECORD_PAGE_SIZE`].
///
/// # Errors
///
/// Returns `ApiError::Network` on transport failure, `ApiError::Status` on a
/// non-OK response, and `ApiError::Malformed` if the body fails validation.
pub async fn fetch_record_page(page: u32) -> Result<AnalysisPage, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_page_endpoint(API_BASE, page);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_record_page(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = page;
        Err(ApiError::Unavailable)
    }
}

/// Delete a record via `DELETE /record/{record_id}`.
///
/// # Errors
///
/// Returns `ApiError::Network` on transport failure and `ApiError::Status` on
/// a non-OK response.
pub async fn delete_record(record_id: i64) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = record_endpoint(API_BASE, record_id);
        let resp = gloo_net::http::Request::delete(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = record_id;
        Err(ApiError::Unavailable)
    }
}
