use leptos::*;

/// Page before `page`, kept inside `1..=page_count`
fn prev_page(page: usize, page_count: usize) -> usize {
    page.saturating_sub(1).min(page_count).max(1)
}

fn next_page(page: usize, page_count: usize) -> usize {
    (page + 1).min(page_count.max(1))
}

/// Numbered page control; with zero pages only the disabled arrows remain
#[component]
pub fn Pagination(
    #[prop(into)] page: Signal<usize>,
    page_count: usize,
    on_change: Callback<usize>,
) -> impl IntoView {
    view! {
        <nav class="pagination">
            <button
                class="btn btn-sm page-button"
                disabled=move || page.get() <= 1
                on:click=move |_| on_change.call(prev_page(page.get_untracked(), page_count))
            >"‹"</button>
            {(1..=page_count)
                .map(|n| {
                    view! {
                        <button
                            class="btn btn-sm page-button"
                            class:active=move || page.get() == n
                            on:click=move |_| on_change.call(n)
                        >
                            {n}
                        </button>
                    }
                })
                .collect_view()}
            <button
                class="btn btn-sm page-button"
                disabled=move || page.get() >= page_count
                on:click=move |_| on_change.call(next_page(page.get_untracked(), page_count))
            >"›"</button>
        </nav>
    }
}
