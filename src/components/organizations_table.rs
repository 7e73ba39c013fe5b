//! Organizations Table Component

use community_admin_core::models::{Organization, OrganizationStatus};
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, ListControls, ListUnavailable, PaginationBar, SearchInput,
    SortHeader,
};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OrganizationsTable(
    /// Fired with the organization ID when a row is selected
    on_select: Callback<u32>,
    selected: Signal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.organizations().get_untracked().to_vec();
    let config = Organization::list_config(ctx.page_size());
    let Some(list) = use_list_view("organizations", records, config) else {
        return view! { <ListUnavailable title="Organizations" /> }.into_any();
    };
    sync_source("organizations", list, move || store.organizations().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Organizations"</h3>
                <SearchInput controls=controls placeholder="Search by name, type or contact..." />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader controls=controls field="name" label="Organization" />
                        <th>"Type"</th>
                        <SortHeader controls=controls field="members" label="Members" />
                        <SortHeader controls=controls field="events" label="Events" />
                        <th>"Status"</th>
                        <th>"Contact"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|org| org.id
                        children=move |org: Organization| {
                            let id = org.id;
                            let status_class = match org.status {
                                OrganizationStatus::Active => "badge badge-success",
                                OrganizationStatus::Inactive => "badge badge-muted",
                            };
                            view! {
                                <tr
                                    class=move || {
                                        if selected.get() == Some(id) {
                                            "clickable selected"
                                        } else {
                                            "clickable"
                                        }
                                    }
                                    on:click=move |_| on_select.run(id)
                                >
                                    <td class="cell-strong">{org.name.clone()}</td>
                                    <td>{org.org_type.clone()}</td>
                                    <td>{org.members}</td>
                                    <td>{org.events}</td>
                                    <td><span class=status_class>{org.status.as_str()}</span></td>
                                    <td class="cell-muted">{org.contact.clone()}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No organizations match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
