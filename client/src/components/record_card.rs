//! One row of the analysis list.
//!
//! DESIGN
//! ======
//! The whole row is a button-like region that opens the record detail route by
//! click, Enter or Space. The delete icon sits inside it and stops propagation
//! so deleting never navigates.

#[cfg(test)]
#[path = "record_card_test.rs"]
mod record_card_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::metrics_visualizer::MetricsVisualizer;
use crate::net::types::{AnalysisRecord, TRACKED_METRICS};
use crate::pages::analysis_detail::record_detail_path;
use crate::util::grade::{GradeTone, compute_overall_grade, metric_tone};
use crate::util::radar::grade_level;

/// Keys that activate a focused record row.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

/// Display text and class for a tracked metric, tolerating a missing entry.
fn metric_display(record: &AnalysisRecord, key: &str) -> (String, &'static str) {
    match record.analyze_result.metric(key) {
        Some(metric) => (metric.grade.as_str().to_owned(), metric_tone(&metric.grade).text_class()),
        None => ("-".to_owned(), GradeTone::Negative.text_class()),
    }
}

/// Card rendering a record's title, date, grades and metrics glyph.
#[component]
pub fn RecordCard(
    record: AnalysisRecord,
    on_delete: Callback<i64>,
    #[prop(into)] deleting: Signal<bool>,
) -> impl IntoView {
    let navigate = use_navigate();
    let record_id = record.record_id;
    let href = record_detail_path(record_id);
    let overall = compute_overall_grade(record.analyze_result.grades());
    let tone = overall.tone();
    let levels: Vec<f64> = record.analyze_result.grades().map(grade_level).collect();

    let open = move || navigate(&href, NavigateOptions::default());
    let open_on_click = {
        let open = open.clone();
        move |_| open()
    };
    let open_on_key = move |ev: leptos::ev::KeyboardEvent| {
        if is_activation_key(&ev.key()) {
            ev.prevent_default();
            open();
        }
    };

    let metric_rows = TRACKED_METRICS
        .iter()
        .map(|&(key, label)| {
            let (text, class) = metric_display(&record, key);
            view! {
                <div class="record-card__metric">
                    <span class="record-card__metric-label">{format!("{label}:")}</span>
                    <span class=class>{text}</span>
                </div>
            }
        })
        .collect_view();

    let title = record.title.clone();
    let aria_label = format!("{} 분석 결과 보기", record.title);
    let visual_label = format!("{}의 메트릭 시각화", record.title);
    let badge_class = tone.badge_class();
    let badge_label = format!("전체 평가: {}", overall.label());
    let created_at = record.created_at.clone();

    view! {
        <div
            class="record-card"
            role="button"
            tabindex="0"
            aria-label=aria_label
            on:click=open_on_click
            on:keydown=open_on_key
        >
            <div class="record-card__body">
                <div class="record-card__header">
                    <div class="record-card__heading">
                        <h2 class="record-card__title">{title}</h2>
                        <button
                            class="record-card__delete"
                            aria-label="기록 삭제"
                            disabled=move || deleting.get()
                            on:click=move |ev: leptos::ev::MouseEvent| {
                                ev.stop_propagation();
                                on_delete.run(record_id);
                            }
                            on:keydown=move |ev: leptos::ev::KeyboardEvent| ev.stop_propagation()
                        >
                            <svg class="record-card__delete-icon" viewBox="0 0 24 24" aria-hidden="true">
                                <path d="M4 7h16M10 11v6M14 11v6M6 7l1 12h10l1-12M9 7V4h6v3"></path>
                            </svg>
                        </button>
                    </div>
                    <span class="record-card__date">{created_at}</span>
                </div>
                <div class="record-card__grades">
                    <div class=badge_class role="status" aria-label=badge_label>
                        {overall.label()}
                    </div>
                    <div class="record-card__metrics">{metric_rows}</div>
                </div>
            </div>
            <div class="record-card__visual">
                <MetricsVisualizer levels=levels tone=tone label=visual_label/>
            </div>
        </div>
    }
}
