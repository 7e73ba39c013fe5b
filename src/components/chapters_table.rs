//! Chapters Table Component
//!
//! Chapter list on the relationships page with a per-row connection request.

use community_admin_core::models::{Chapter, RequestStatus};
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, ListControls, ListUnavailable, PaginationBar, SearchInput,
    SortHeader,
};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ChaptersTable(
    /// Fired with the chapter ID when "Send Request" is clicked
    on_send_request: Callback<u32>,
    /// Chapter whose request is in flight
    sending: Signal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.chapters().get_untracked().to_vec();
    let config = Chapter::list_config(ctx.page_size());
    let Some(list) = use_list_view("chapters", records, config) else {
        return view! { <ListUnavailable title="Chapters" /> }.into_any();
    };
    sync_source("chapters", list, move || store.chapters().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Chapters"</h3>
                <SearchInput
                    controls=controls
                    placeholder="Search chapters, locations, contacts..."
                />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader controls=controls field="sr_no" label="Sr. No" />
                        <SortHeader controls=controls field="name" label="Chapter" />
                        <th>"Location"</th>
                        <SortHeader
                            controls=controls
                            field="active_members"
                            label="Active Members"
                        />
                        <SortHeader controls=controls field="events" label="Events" />
                        <SortHeader
                            controls=controls
                            field="active_sponsors"
                            label="Active Sponsors"
                        />
                        <th>"Contact"</th>
                        <th class="actions-col">"Connection"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|chapter| (chapter.id, chapter.request_status)
                        children=move |chapter: Chapter| {
                            let id = chapter.id;
                            let is_sending = move || sending.get() == Some(id);
                            let action = match chapter.request_status {
                                None => view! {
                                    <button
                                        class="primary-btn small"
                                        disabled=move || sending.get().is_some()
                                        on:click=move |_| on_send_request.run(id)
                                    >
                                        {move || {
                                            if is_sending() { "Sending..." } else { "Send Request" }
                                        }}
                                    </button>
                                }.into_any(),
                                Some(RequestStatus::Sent) => view! {
                                    <span class="badge badge-warning">"Request Sent"</span>
                                }.into_any(),
                                Some(RequestStatus::Accepted) => view! {
                                    <span class="badge badge-success">"Connected"</span>
                                }.into_any(),
                            };
                            view! {
                                <tr>
                                    <td>{chapter.sr_no}</td>
                                    <td class="cell-strong">{chapter.name.clone()}</td>
                                    <td>{chapter.location.clone()}</td>
                                    <td>{chapter.active_members}</td>
                                    <td>{chapter.events}</td>
                                    <td>{chapter.active_sponsors}</td>
                                    <td>
                                        <div>{chapter.contact_name.clone()}</div>
                                        <div class="cell-muted">
                                            {chapter.contact_number.clone()}
                                        </div>
                                    </td>
                                    <td class="actions-col">{action}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No chapters match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
