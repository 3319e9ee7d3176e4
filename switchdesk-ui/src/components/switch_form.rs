//! Create/edit form for a single switch

use leptos::*;
use switchdesk_common::{DraftField, SwitchDraft};

/// Inline form bound to the current draft.
///
/// Required inputs are enforced by the browser before `on_submit` fires; the port is optional.
#[component]
pub fn SwitchForm(
    #[prop(into)] draft: Signal<SwitchDraft>,
    /// Edit mode switches the button label to "Update"
    #[prop(into)]
    editing: Signal<bool>,
    on_change: Callback<(DraftField, String)>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <form class="switch-form" on:submit=submit>
            {DraftField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <div class="form-group">
                            <label>{field.label()}</label>
                            <input
                                type="text"
                                name=field.key()
                                required=field.is_required()
                                prop:value=move || draft.with(|d| d.get(field).to_string())
                                on:input=move |ev| on_change.call((field, event_target_value(&ev)))
                            />
                        </div>
                    }
                })
                .collect_view()}
            <button type="submit" class="btn btn-primary">
                {move || if editing.get() { "Update" } else { "Add New" }}
            </button>
        </form>
    }
}
