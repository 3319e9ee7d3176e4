//! Switch inventory page
//!
//! Lists, searches, paginates, creates, edits and deletes switches. All table state lives in
//! one `InventoryState` signal; every event swaps in the state returned by its transition.

use leptos::*;
use switchdesk_common::{
    Action, DraftField, InventoryState, Mutation, PageSize, Phase, SwitchId, SwitchRecord,
};

use crate::api;
use crate::components::{PageSizeSelect, Pagination, SearchBox, SwitchForm, SwitchTable};
use crate::error::{LoadingView, RequestFailedView};

/// Send a mutation and fold its result back into the page state
async fn run_mutation(state: RwSignal<InventoryState>, mutation: Mutation) {
    let outcome = api::perform(&mutation.request).await;
    if let Err(e) = &outcome {
        logging::error!("Switch request #{} failed: {}", mutation.ticket.seq, e);
    }
    let completion = mutation.complete(outcome);

    // page unmounted while the request was in flight
    let Some(stale) = state.try_with_untracked(|s| s.is_stale(&completion.ticket)) else {
        return;
    };
    if stale {
        logging::warn!(
            "Switch request #{} finished after the form moved on",
            completion.ticket.seq
        );
    }

    state.update(|s| *s = s.reconcile(completion));
}

#[component]
pub fn InventoryTable() -> impl IntoView {
    let state = create_rw_signal(InventoryState::default());
    let dispatch = move |action: Action| state.update(|s| *s = s.reduce(action));

    // Load switches once on mount
    create_effect(move |_| {
        spawn_local(async move {
            let result = api::list_switches().await;
            match &result {
                Ok(records) => logging::log!("Loaded {} switches", records.len()),
                Err(e) => logging::error!("Failed to load switches: {}", e),
            }
            dispatch(Action::Loaded(result));
        });
    });

    let phase = create_memo(move |_| state.with(|s| s.phase().clone()));
    let query = create_memo(move |_| state.with(|s| s.query().to_string()));
    let draft = create_memo(move |_| state.with(|s| s.form().draft.clone()));
    let editing = create_memo(move |_| state.with(|s| s.form().is_editing()));
    let page_size = create_memo(move |_| state.with(|s| s.page_size()));
    let page = create_memo(move |_| state.with(|s| s.page()));
    let page_count = create_memo(move |_| state.with(|s| s.view().page_count));
    let rows = create_memo(move |_| {
        state.with(|s| {
            s.view()
                .rows
                .into_iter()
                .map(|row| (row.ordinal, row.record.clone()))
                .collect::<Vec<(usize, SwitchRecord)>>()
        })
    });

    let on_search = Callback::new(move |q: String| dispatch(Action::SearchChanged(q)));
    let on_page_size = Callback::new(move |size: PageSize| dispatch(Action::PageSizeChanged(size)));
    let on_page = Callback::new(move |p: usize| dispatch(Action::PageChanged(p)));
    let on_field = Callback::new(move |(field, value): (DraftField, String)| {
        dispatch(Action::FieldChanged(field, value))
    });
    let on_edit = Callback::new(move |id: SwitchId| dispatch(Action::EditRequested(id)));

    let on_submit = Callback::new(move |_: ()| {
        let (next, mutation) = state.with_untracked(|s| s.submit());
        state.set(next);
        spawn_local(run_mutation(state, mutation));
    });

    let on_delete = Callback::new(move |id: SwitchId| {
        let (next, mutation) = state.with_untracked(|s| s.delete(id));
        state.set(next);
        spawn_local(run_mutation(state, mutation));
    });

    view! {
        <div class="inventory-page">
            {move || match phase.get() {
                Phase::Loading => view! { <LoadingView/> }.into_view(),
                Phase::Failed(error) => view! { <RequestFailedView error=error/> }.into_view(),
                Phase::Ready => view! {
                    <div class="page-header">
                        <h1>"Switches Data"</h1>
                    </div>

                    <SearchBox value=query on_input=on_search/>

                    <SwitchForm draft=draft editing=editing on_change=on_field on_submit=on_submit/>

                    <PageSizeSelect value=page_size on_change=on_page_size/>

                    <SwitchTable rows=rows on_edit=on_edit on_delete=on_delete/>

                    {move || page_count.get().map(|count| view! {
                        <Pagination page=page page_count=count on_change=on_page/>
                    })}
                }.into_view(),
            }}
        </div>
    }
}
