//! Volunteer List Table Component

use community_admin_core::models::Volunteer;
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, ListControls, ListUnavailable, PaginationBar, SearchInput,
    SortHeader,
};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn VolunteerListTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.volunteers().get_untracked().to_vec();
    let config = Volunteer::list_config(ctx.page_size());
    let Some(list) = use_list_view("volunteers", records, config) else {
        return view! { <ListUnavailable title="Volunteers" /> }.into_any();
    };
    sync_source("volunteers", list, move || store.volunteers().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Volunteers"</h3>
                <SearchInput controls=controls placeholder="Search volunteers..." />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader controls=controls field="name" label="Name" />
                        <SortHeader controls=controls field="slot" label="Slot" />
                        <th>"Contact"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|v| v.id
                        children=move |v: Volunteer| view! {
                            <tr>
                                <td class="cell-strong">{v.name}</td>
                                <td>{v.slot}</td>
                                <td class="cell-muted">{v.contact}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No volunteers match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
