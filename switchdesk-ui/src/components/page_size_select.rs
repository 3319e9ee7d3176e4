use leptos::*;
use switchdesk_common::paging::{PageSize, PAGE_SIZE_CHOICES};

/// Rows-per-page selector: 10, 20, 50, 100 or All
#[component]
pub fn PageSizeSelect(
    #[prop(into)] value: Signal<PageSize>,
    on_change: Callback<PageSize>,
) -> impl IntoView {
    let change = move |ev: ev::Event| match event_target_value(&ev).parse::<PageSize>() {
        Ok(size) => on_change.call(size),
        Err(e) => logging::warn!("Ignoring page size selection: {}", e),
    };

    view! {
        <div class="form-group page-size">
            <label>"Rows per page"</label>
            <select class="filter-select" on:change=change>
                {PAGE_SIZE_CHOICES
                    .into_iter()
                    .map(|size| {
                        let label = size.to_string();
                        view! {
                            <option value=label.clone() selected=move || value.get() == size>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
