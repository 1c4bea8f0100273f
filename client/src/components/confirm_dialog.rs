//! Generic confirm/deny modal.
//!
//! The dialog takes keyboard focus when it mounts so Escape works without a
//! prior click.

#[cfg(test)]
#[path = "confirm_dialog_test.rs"]
mod confirm_dialog_test;

use leptos::prelude::*;

/// Keys that dismiss a modal.
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

/// Move keyboard focus to `dialog` once it is in the DOM.
pub(crate) fn focus_on_mount(dialog: NodeRef<leptos::html::Div>) {
    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let Some(el) = dialog.get() else {
            return;
        };
        if el.focus().is_err() {
            leptos::logging::warn!("dialog could not take focus");
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = dialog;
}

/// The user's answer to a confirmation prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptDecision {
    Confirm,
    Deny,
}

/// Modal with a title and two buttons. Backdrop clicks and Escape count as
/// [`PromptDecision::Deny`].
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] confirm_label: String,
    #[prop(into)] deny_label: String,
    on_resolve: Callback<PromptDecision>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();
    focus_on_mount(dialog_ref);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_dismiss_key(&ev.key()) {
            ev.prevent_default();
            on_resolve.run(PromptDecision::Deny);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_resolve.run(PromptDecision::Deny)>
            <div
                node_ref=dialog_ref
                class="dialog dialog--confirm"
                role="alertdialog"
                aria-modal="true"
                aria-labelledby="confirm-dialog-title"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <h2 id="confirm-dialog-title">{title}</h2>
                <div class="dialog__actions">
                    <button class="btn btn--danger" on:click=move |_| on_resolve.run(PromptDecision::Confirm)>
                        {confirm_label}
                    </button>
                    <button class="btn" on:click=move |_| on_resolve.run(PromptDecision::Deny)>
                        {deny_label}
                    </button>
                </div>
            </div>
        </div>
    }
}
