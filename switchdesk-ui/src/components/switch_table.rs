use crate::utils::format_local_timestamp;
use leptos::*;
use switchdesk_common::{SwitchId, SwitchRecord};

/// Rows of the current page with edit and delete actions.
///
/// Each row is paired with its 1-based position in the filtered view.
#[component]
pub fn SwitchTable(
    #[prop(into)] rows: Signal<Vec<(usize, SwitchRecord)>>,
    on_edit: Callback<SwitchId>,
    on_delete: Callback<SwitchId>,
) -> impl IntoView {
    view! {
        <div class="table-container">
            <table class="switch-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Wifi Name"</th>
                        <th>"Switch Location"</th>
                        <th>"Switch Name"</th>
                        <th>"Connected Port"</th>
                        <th>"Switch IP Address"</th>
                        <th>"Created At"</th>
                        <th>"Updated At"</th>
                        <th class="actions-column">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows.get().into_iter().map(|(ordinal, record)| {
                        let port = record.port().to_string();
                        let created = format_local_timestamp(&record.created_at);
                        let updated = format_local_timestamp(&record.updated_at);
                        let edit_id = record.id.clone();
                        let delete_id = record.id;

                        view! {
                            <tr>
                                <td>{ordinal}</td>
                                <td>{record.wifi_name}</td>
                                <td>{record.switch_location}</td>
                                <td>{record.switch_name}</td>
                                <td>{port}</td>
                                <td>{record.switch_ip_address}</td>
                                <td>{created}</td>
                                <td>{updated}</td>
                                <td class="actions">
                                    <button
                                        class="btn btn-sm btn-secondary"
                                        title="Edit"
                                        on:click=move |_| on_edit.call(edit_id.clone())
                                    >"✎"</button>
                                    <button
                                        class="btn btn-sm btn-danger"
                                        title="Delete"
                                        on:click=move |_| on_delete.call(delete_id.clone())
                                    >"🗑"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}
