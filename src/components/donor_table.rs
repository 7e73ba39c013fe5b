//! Donor Table Component
//!
//! Donations list with search, sort, pagination and a delete action.

use community_admin_core::models::Donor;
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, DeleteConfirmButton, ListControls, ListUnavailable, PaginationBar,
    SearchInput, SortHeader,
};
use crate::context::use_app_context;
use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn DonorTable(
    /// Fired with the donor ID once deletion is confirmed
    on_delete: Callback<u32>,
    /// Donor currently being deleted
    deleting: Signal<Option<u32>>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.donors().get_untracked().to_vec();
    let Some(list) = use_list_view("donors", records, Donor::list_config(ctx.page_size())) else {
        return view! { <ListUnavailable title="Donations" /> }.into_any();
    };
    sync_source("donors", list, move || store.donors().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Donations"</h3>
                <SearchInput controls=controls placeholder="Search by name or invoice..." />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader controls=controls field="name" label="Donor" />
                        <SortHeader controls=controls field="amount" label="Amount" />
                        <th>"Invoice"</th>
                        <SortHeader controls=controls field="date" label="Date" />
                        <th>"Type"</th>
                        <th class="actions-col">"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|donor| donor.id
                        children=move |donor: Donor| {
                            let id = donor.id;
                            view! {
                                <tr>
                                    <td class="cell-strong">{donor.name.clone()}</td>
                                    <td>{format::currency(u64::from(donor.amount))}</td>
                                    <td class="cell-muted">{donor.invoice_ref.clone()}</td>
                                    <td>{format::date(donor.date)}</td>
                                    <td>
                                        <span class=donor.donor_type.badge_class()>
                                            {donor.donor_type.as_str()}
                                        </span>
                                    </td>
                                    <td class="actions-col">
                                        <DeleteConfirmButton
                                            on_confirm=move |_| on_delete.run(id)
                                            busy=Signal::derive(move || deleting.get() == Some(id))
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No donations match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
