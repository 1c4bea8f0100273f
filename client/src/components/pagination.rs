//! Page selector shown under the record list.

use leptos::prelude::*;

use crate::util::pagination::{PageItem, has_next, has_previous, page_items};

/// Numbered page buttons with previous/next steps.
///
/// `on_change` fires with the 1-based page the user picked; it is not fired
/// for the page already selected.
#[component]
pub fn Pagination(
    #[prop(into)] current: Signal<u32>,
    #[prop(into)] total: Signal<u32>,
    on_change: Callback<u32>,
) -> impl IntoView {
    let select = move |page: u32| {
        if page != current.get_untracked() {
            on_change.run(page);
        }
    };

    view! {
        <nav class="pagination" aria-label="페이지 네비게이션">
            <button
                class="pagination__step"
                aria-label="이전 페이지"
                disabled=move || !has_previous(current.get())
                on:click=move |_| select(current.get_untracked().saturating_sub(1))
            >
                "‹"
            </button>
            {move || {
                page_items(current.get(), total.get())
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(page) => {
                            view! {
                                <button
                                    class="pagination__page"
                                    class:pagination__page--selected=move || current.get() == page
                                    aria-current=move || (current.get() == page).then_some("page")
                                    on:click=move |_| select(page)
                                >
                                    {page}
                                </button>
                            }
                                .into_any()
                        }
                        PageItem::Ellipsis => {
                            view! { <span class="pagination__ellipsis" aria-hidden="true">"…"</span> }.into_any()
                        }
                    })
                    .collect_view()
            }}
            <button
                class="pagination__step"
                aria-label="다음 페이지"
                disabled=move || !has_next(current.get(), total.get())
                on:click=move |_| select(current.get_untracked() + 1)
            >
                "›"
            </button>
        </nav>
    }
}
