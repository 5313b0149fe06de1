//! Pagination Bar Component

use comic_admin_core::catalog::pagination::page_links;
use comic_admin_core::catalog::PageLink;
use leptos::prelude::*;

/// Previous / page links / next; hidden for a single page
#[component]
pub fn PaginationBar(
    current: Memo<usize>,
    total: Memo<usize>,
    on_select: impl Fn(usize) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <Show when=move || { total.get() > 1 }>
            <nav class="pagination">
                <button
                    class="page"
                    disabled=move || current.get() <= 1
                    on:click=move |_| on_select(current.get_untracked().saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                {move || page_links(current.get(), total.get()).into_iter().map(|link| match link {
                    PageLink::Page(page) => view! {
                        <button
                            class=move || if current.get() == page { "page active" } else { "page" }
                            on:click=move |_| on_select(page)
                        >
                            {page}
                        </button>
                    }.into_any(),
                    PageLink::Ellipsis => view! { <span class="ellipsis">"…"</span> }.into_any(),
                }).collect_view()}
                <button
                    class="page"
                    disabled=move || current.get() >= total.get()
                    on:click=move |_| on_select((current.get_untracked() + 1).min(total.get_untracked()))
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
