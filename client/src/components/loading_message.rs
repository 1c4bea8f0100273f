//! Spinner with a rotating status line for long waits.
//!
//! The rotation interval is created on mount and dropped from `on_cleanup`,
//! which cancels the browser timer, so repeated mount/unmount cycles never
//! leave a pending tick behind.

#[cfg(test)]
#[path = "loading_message_test.rs"]
mod loading_message_test;

use leptos::prelude::*;

use crate::util::message_cycle::MessageCycle;

/// Advance `cycle` by one message. Returns `false` once the owning component
/// has been disposed, in which case nothing happens.
pub fn advance_cycle(cycle: RwSignal<MessageCycle>) -> bool {
    cycle.try_update(MessageCycle::advance).is_some()
}

/// Loading indicator cycling through `messages` (defaults to the analysis
/// wait messages) every `ROTATE_INTERVAL_MS`.
#[component]
pub fn LoadingMessage(#[prop(optional)] messages: Option<&'static [&'static str]>) -> impl IntoView {
    let cycle = RwSignal::new(messages.and_then(MessageCycle::new).unwrap_or_default());

    #[cfg(feature = "hydrate")]
    {
        use crate::util::message_cycle::ROTATE_INTERVAL_MS;

        let interval = StoredValue::new_local(Some(gloo_timers::callback::Interval::new(ROTATE_INTERVAL_MS, move || {
            advance_cycle(cycle);
        })));
        on_cleanup(move || {
            // Dropping the handle clears the browser interval.
            interval.try_update_value(Option::take);
        });
    }

    view! {
        <div class="loading-message" role="status" aria-live="polite">
            <span class="loading-message__spinner" aria-hidden="true"></span>
            {move || {
                // Re-created per index so the enter transition replays.
                let current = cycle.get();
                view! {
                    <p class="loading-message__text" data-index=current.index().to_string()>
                        {current.current()}
                    </p>
                }
            }}
        </div>
    }
}
