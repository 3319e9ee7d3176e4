use leptos::*;

/// Free-text search across every column
#[component]
pub fn SearchBox(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-filter">
            <input
                type="text"
                class="search-input"
                placeholder="Search"
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
            <span class="search-icon">"🔍"</span>
        </div>
    }
}
