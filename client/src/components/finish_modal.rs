//! Dialog shown when a sentence-practice session ends.

#[cfg(test)]
#[path = "finish_modal_test.rs"]
mod finish_modal_test;

use leptos::prelude::*;

use crate::components::confirm_dialog::{focus_on_mount, is_dismiss_key};

pub const FINISH_TITLE: &str = "연습이 완료되었습니다!";

/// Congratulation line for `count` completed sentences.
pub fn completion_message(count: u32) -> String {
    format!("축하합니다! {count}개의 문장연습을 모두 마쳤습니다.")
}

/// Session-complete modal.
///
/// Visibility is owned by the caller through `is_open` / `on_close`. The
/// completed-sentence count is read-only here; see
/// `state::practice::completed_sentences`.
#[component]
pub fn FinishModal(
    #[prop(into)] is_open: Signal<bool>,
    on_close: Callback<()>,
    #[prop(into)] completed: Signal<u32>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog_ref);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    node_ref=dialog_ref
                    class="dialog dialog--finish"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby="finish-modal-title"
                    aria-describedby="finish-modal-description"
                    tabindex="0"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=on_keydown
                >
                    <button class="dialog__close" aria-label="닫기" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                    <h2 id="finish-modal-title">{FINISH_TITLE}</h2>
                    <p id="finish-modal-description" class="dialog__body" role="status" aria-live="polite">
                        {move || completion_message(completed.get())}
                    </p>
                    <div class="dialog__actions">
                        <button class="btn btn--primary" aria-label="연습 종료하기" on:click=move |_| on_close.run(())>
                            "종료하기"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
