use super::*;
use crate::net::types::{Grade, METRIC_CLARITY};

fn record_json(id: i64) -> serde_json::Value {
    serde_json::json!({
        "recordId": id,
        "title": format!("record {id}"),
        "createdAt": "2024-11-02",
        "analyzeResult": {
            "metrics": {
                "명료도(Clarity)": { "grade": "excellent" },
                "발화의 에너지(Utterance Energy)": { "grade": "good" },
                "멜로디 지수(Melody Index)": { "grade": "poor" }
            }
        }
    })
}

fn envelope(content: Vec<serde_json::Value>, total_pages: u32) -> String {
    serde_json::json!({
        "status": 200,
        "message": "ok",
        "data": { "content": content, "totalPages": total_pages }
    })
    .to_string()
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn zero_based_page_index_subtracts_one() {
    assert_eq!(zero_based_page_index(1), 0);
    assert_eq!(zero_based_page_index(4), 3);
}

#[test]
fn zero_based_page_index_clamps_page_zero() {
    assert_eq!(zero_based_page_index(0), 0);
}

#[test]
fn record_page_endpoint_uses_zero_based_index_and_fixed_size() {
    assert_eq!(record_page_endpoint("/api", 1), "/api/record?page=0&size=10");
    assert_eq!(record_page_endpoint("/api", 3), "/api/record?page=2&size=10");
}

#[test]
fn record_endpoint_formats_expected_path() {
    assert_eq!(record_endpoint("/api", 42), "/api/record/42");
}

// =============================================================
// parse_record_page
// =============================================================

#[test]
fn parse_record_page_unwraps_data_envelope() {
    let page = parse_record_page(&envelope(vec![record_json(1), record_json(2)], 5)).unwrap();
    assert_eq!(page.total_pages, 5);
    let ids: Vec<i64> = page.content.iter().map(|r| r.record_id).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(page.content[0].analyze_result.metric(METRIC_CLARITY).map(|m| &m.grade), Some(&Grade::Excellent));
}

#[test]
fn parse_record_page_accepts_empty_page() {
    let page = parse_record_page(&envelope(vec![], 0)).unwrap();
    assert!(page.content.is_empty());
    assert_eq!(page.total_pages, 0);
}

#[test]
fn parse_record_page_rejects_missing_envelope() {
    let body = serde_json::json!({ "content": [], "totalPages": 0 }).to_string();
    assert!(matches!(parse_record_page(&body), Err(ApiError::Malformed(_))));
}

#[test]
fn parse_record_page_rejects_non_json() {
    assert!(matches!(parse_record_page("<html>"), Err(ApiError::Malformed(_))));
}

#[test]
fn parse_record_page_rejects_duplicate_ids() {
    let err = parse_record_page(&envelope(vec![record_json(3), record_json(3)], 1)).unwrap_err();
    assert_eq!(err, ApiError::Malformed("duplicate record id 3".to_owned()));
}

#[test]
fn parse_record_page_rejects_missing_tracked_metric() {
    let mut record = record_json(9);
    record["analyzeResult"]["metrics"]
        .as_object_mut()
        .unwrap()
        .remove("멜로디 지수(Melody Index)");
    let err = parse_record_page(&envelope(vec![record], 1)).unwrap_err();
    assert_eq!(err, ApiError::Malformed("record 9 is missing metric 멜로디 지수(Melody Index)".to_owned()));
}

#[test]
fn parse_record_page_allows_extra_metrics() {
    let mut record = record_json(4);
    record["analyzeResult"]["metrics"]["속도(Speed)"] = serde_json::json!({ "grade": "good" });
    let page = parse_record_page(&envelope(vec![record], 1)).unwrap();
    assert_eq!(page.content[0].analyze_result.metrics.len(), 4);
}
