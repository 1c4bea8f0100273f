//! Paginated list of voice-analysis records with delete support.
//!
//! SYSTEM CONTEXT
//! ==============
//! Landing route of the analysis feature. Changing the page re-fetches from
//! the record service; deleting asks for confirmation, calls the service, and
//! only then drops the row locally (no refetch).

#[cfg(test)]
#[path = "analysis_list_test.rs"]
mod analysis_list_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::{ConfirmDialog, PromptDecision};
use crate::components::loading_message::LoadingMessage;
use crate::components::pagination::Pagination;
use crate::components::record_card::RecordCard;
use crate::state::records::RecordsState;

pub const DELETE_PROMPT_TITLE: &str = "대본을 삭제하시겠습니까?";
pub const EMPTY_NOTICE: &str = "분석 기록이 없습니다.";

/// Record id to delete once the prompt for `pending` is answered.
pub fn resolve_delete_prompt(pending: Option<i64>, decision: PromptDecision) -> Option<i64> {
    match decision {
        PromptDecision::Confirm => pending,
        PromptDecision::Deny => None,
    }
}

/// Analysis list page.
#[component]
pub fn AnalysisListPage() -> impl IntoView {
    let records = RwSignal::new(RecordsState::default());
    let requested_page = RwSignal::new(1_u32);
    let pending_delete = RwSignal::new(None::<i64>);

    Effect::new(move || {
        let page = requested_page.get();
        load_page(records, page);
    });

    let on_page_change = Callback::new(move |page: u32| requested_page.set(page));
    let on_delete_request = Callback::new(move |record_id: i64| pending_delete.set(Some(record_id)));
    let on_delete_resolve = Callback::new(move |decision: PromptDecision| {
        let target = resolve_delete_prompt(pending_delete.get_untracked(), decision);
        pending_delete.set(None);
        if let Some(record_id) = target {
            delete_record(records, record_id);
        }
    });

    let total_pages = Signal::derive(move || records.with(RecordsState::total_pages));

    view! {
        <main class="analysis-list" role="main">
            <h1 class="analysis-list__title">"음성 분석 목록"</h1>
            <Show when=move || records.with(|s| s.error.is_some())>
                <p class="analysis-list__error" role="alert">
                    {move || records.with(|s| s.error.clone().unwrap_or_default())}
                </p>
            </Show>
            {move || {
                if records.with(RecordsState::shows_empty_notice) {
                    view! { <p class="analysis-list__empty" role="status">{EMPTY_NOTICE}</p> }.into_any()
                } else if records.with(|s| s.page.is_none()) {
                    view! { <LoadingMessage/> }.into_any()
                } else {
                    view! {
                        <div class="analysis-list__content">
                            <div class="analysis-list__items">
                                {records
                                    .with(|s| s.records().to_vec())
                                    .into_iter()
                                    .map(|record| {
                                        let record_id = record.record_id;
                                        let deleting = Signal::derive(move || records.with(|s| s.is_deleting(record_id)));
                                        view! { <RecordCard record=record on_delete=on_delete_request deleting=deleting/> }
                                    })
                                    .collect_view()}
                            </div>
                            <Pagination current=requested_page total=total_pages on_change=on_page_change/>
                        </div>
                    }
                        .into_any()
                }
            }}
            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title=DELETE_PROMPT_TITLE
                    confirm_label="삭제"
                    deny_label="취소"
                    on_resolve=on_delete_resolve
                />
            </Show>
        </main>
    }
}

fn load_page(records: RwSignal<RecordsState>, page: u32) {
    let Some(ticket) = records.try_update(|s| s.begin_fetch(page)) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::fetch_record_page(ticket.page()).await;
            if let Err(e) = &result {
                leptos::logging::warn!("record page {} fetch failed: {e}", ticket.page());
            }
            let outcome = records.try_update(|s| s.finish_fetch(ticket, result));
            if outcome == Some(crate::state::records::FetchOutcome::Superseded) {
                leptos::logging::log!("dropped superseded response for page {}", ticket.page());
            }
        });
    }

    // Server render keeps the pending state; the browser fetches after hydration.
    #[cfg(not(feature = "hydrate"))]
    let _ = ticket;
}

fn delete_record(records: RwSignal<RecordsState>, record_id: i64) {
    let started = records.try_update(|s| s.begin_delete(record_id)).unwrap_or(false);
    if !started {
        return;
    }

    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_record(record_id).await;
            if let Err(e) = &result {
                leptos::logging::warn!("record {record_id} delete failed: {e}");
            }
            records.try_update(|s| s.finish_delete(record_id, result));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        records.update(|s| {
            s.finish_delete(record_id, Err(crate::net::error::ApiError::Unavailable));
        });
    }
}
