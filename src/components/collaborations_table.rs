//! Collaborations Table Component
//!
//! Inter-chapter collaborations with per-status counts.

use community_admin_core::models::{count_by_status, Collaboration, CollaborationStatus};
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, ListControls, ListUnavailable, PaginationBar, SearchInput,
    SortHeader,
};
use crate::context::use_app_context;
use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

fn status_badge(status: CollaborationStatus) -> (&'static str, &'static str) {
    match status {
        CollaborationStatus::Ongoing => ("Ongoing", "badge badge-primary"),
        CollaborationStatus::Completed => ("Completed", "badge badge-success"),
        CollaborationStatus::Pending => ("Pending", "badge badge-warning"),
    }
}

#[component]
pub fn CollaborationsTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.collaborations().get_untracked().to_vec();
    let config = Collaboration::list_config(ctx.page_size());
    let Some(list) = use_list_view("collaborations", records, config) else {
        return view! { <ListUnavailable title="Collaborations" /> }.into_any();
    };
    sync_source("collaborations", list, move || store.collaborations().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());
    let count = move |status: CollaborationStatus| {
        store.collaborations().with(|c| count_by_status(c.iter(), status))
    };

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Collaborations"</h3>
                <SearchInput controls=controls placeholder="Search chapters or type..." />
            </div>
            <div class="status-counts">
                {[
                    CollaborationStatus::Ongoing,
                    CollaborationStatus::Completed,
                    CollaborationStatus::Pending,
                ]
                    .into_iter()
                    .map(move |status| {
                        let (label, class) = status_badge(status);
                        view! {
                            <div class="status-count">
                                <span class=class>{label}</span>
                                <strong>{move || count(status)}</strong>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Chapters"</th>
                        <th>"Type"</th>
                        <th>"Status"</th>
                        <SortHeader controls=controls field="start_date" label="Started" />
                        <SortHeader controls=controls field="events" label="Joint Events" />
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|c| c.id
                        children=move |c: Collaboration| {
                            let (label, class) = status_badge(c.status);
                            view! {
                                <tr>
                                    <td class="cell-strong">
                                        {format!("{} ↔ {}", c.chapter_a, c.chapter_b)}
                                    </td>
                                    <td>{c.collab_type.clone()}</td>
                                    <td><span class=class>{label}</span></td>
                                    <td>{format::date(c.start_date)}</td>
                                    <td>{c.events}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No collaborations match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
