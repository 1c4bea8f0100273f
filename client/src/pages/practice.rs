//! Sentence-practice session.
//!
//! Walks the user through [`PRACTICE_SENTENCES`] one at a time. Each finished
//! sentence bumps the shared `PracticeState`; once every sentence is done the
//! session-complete dialog opens, and closing it returns to the record list.

#[cfg(test)]
#[path = "practice_test.rs"]
mod practice_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::finish_modal::FinishModal;
use crate::state::practice::{PracticeState, completed_sentences};

pub const PRACTICE_SENTENCES: [&str; 3] = [
    "간장 공장 공장장은 강 공장장이다.",
    "내가 그린 기린 그림은 목 긴 기린 그림이다.",
    "경찰청 철창살은 외철창살이다.",
];

/// Sentence to show after `completed` sentences, or `None` once all are done.
pub fn current_sentence(completed: u32) -> Option<&'static str> {
    usize::try_from(completed).ok().and_then(|i| PRACTICE_SENTENCES.get(i).copied())
}

/// Whether the session has covered every practice sentence.
pub fn session_finished(completed: u32) -> bool {
    current_sentence(completed).is_none()
}

/// Progress text such as `2 / 3`.
pub fn progress_label(completed: u32) -> String {
    let total = PRACTICE_SENTENCES.len();
    let done = usize::try_from(completed).map_or(total, |c| c.min(total));
    format!("{done} / {total}")
}

#[component]
pub fn PracticePage() -> impl IntoView {
    let practice = expect_context::<RwSignal<PracticeState>>();
    practice.update(PracticeState::reset);

    let completed = completed_sentences(practice);
    let is_open = Signal::derive(move || session_finished(completed.get()));
    let leave = RwSignal::new(false);
    let on_close = Callback::new(move |()| leave.set(true));

    let navigate = use_navigate();
    Effect::new(move || {
        if leave.get() {
            practice.update(PracticeState::reset);
            navigate("/analysis", NavigateOptions::default());
        }
    });

    view! {
        <main class="practice">
            <h1 class="practice__title">"문장 연습"</h1>
            <p class="practice__progress">
                {move || progress_label(completed.get())}
            </p>
            {move || {
                current_sentence(completed.get())
                    .map(|sentence| {
                        view! {
                            <p class="practice__sentence">{sentence}</p>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| practice.update(PracticeState::complete_sentence)
                            >
                                "다음 문장"
                            </button>
                        }
                    })
            }}
            <FinishModal is_open=is_open on_close=on_close completed=completed/>
        </main>
    }
}
