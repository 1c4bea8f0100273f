//! Route target for a single analysis record.
//!
//! The full analysis report is rendered by the detail feature; this page only
//! resolves the route parameter and offers a way back to the list.

#[cfg(test)]
#[path = "analysis_detail_test.rs"]
mod analysis_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Client route for a record's detail view.
pub fn record_detail_path(record_id: i64) -> String {
    format!("/analysis/{record_id}")
}

/// Parse the `id` route segment.
pub fn parse_record_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

#[component]
pub fn AnalysisDetailPage() -> impl IntoView {
    let params = use_params_map();
    let record_id = move || params.read().get("id").and_then(|raw| parse_record_id(&raw));

    view! {
        <main class="analysis-detail">
            <a class="analysis-detail__back" href="/analysis">"← 목록으로"</a>
            {move || match record_id() {
                Some(id) => view! { <h1 class="analysis-detail__title">{format!("분석 결과 #{id}")}</h1> }.into_any(),
                None => view! { <p class="analysis-detail__error" role="alert">"잘못된 기록 번호입니다."</p> }.into_any(),
            }}
        </main>
    }
}
