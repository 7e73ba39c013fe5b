//! Packages Table Component
//!
//! Sponsorship packages with delivery status.

use community_admin_core::models::Package;
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, ListControls, ListUnavailable, PaginationBar, SearchInput,
    SortHeader,
};
use crate::context::use_app_context;
use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn PackagesTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.packages().get_untracked().to_vec();
    let config = Package::list_config(ctx.page_size());
    let Some(list) = use_list_view("packages", records, config) else {
        return view! { <ListUnavailable title="Sponsorship Packages" /> }.into_any();
    };
    sync_source("packages", list, move || store.packages().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Sponsorship Packages"</h3>
                <SearchInput controls=controls placeholder="Search packages..." />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader controls=controls field="name" label="Package" />
                        <SortHeader controls=controls field="price" label="Price" />
                        <SortHeader controls=controls field="due_date" label="Due Date" />
                        <th>"Delivered On"</th>
                        <SortHeader controls=controls field="quantity" label="Qty" />
                        <th>"Benefits"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|package| package.id
                        children=move |package: Package| {
                            let (label, class) = if package.is_delivered() {
                                ("Delivered", "badge badge-success")
                            } else {
                                ("Pending", "badge badge-warning")
                            };
                            view! {
                                <tr>
                                    <td class="cell-strong">{package.name.clone()}</td>
                                    <td>{format::currency(u64::from(package.price))}</td>
                                    <td>{format::date(package.due_date)}</td>
                                    <td>{format::optional_date(package.delivered_on)}</td>
                                    <td>{package.quantity}</td>
                                    <td class="cell-muted">{package.benefits.clone()}</td>
                                    <td><span class=class>{label}</span></td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No packages match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
