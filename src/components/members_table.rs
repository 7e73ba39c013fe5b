//! Members Table Component

use community_admin_core::models::{Member, MemberStatus};
use leptos::prelude::*;

use super::{
    sync_source, use_list_view, ListControls, ListUnavailable, PaginationBar, SearchInput,
    SortHeader,
};
use crate::context::use_app_context;
use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MembersTable() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let records = store.members().get_untracked().to_vec();
    let config = Member::list_config(ctx.page_size());
    let Some(list) = use_list_view("members", records, config) else {
        return view! { <ListUnavailable title="Members" /> }.into_any();
    };
    sync_source("members", list, move || store.members().get().to_vec());
    let controls = ListControls::new(list);

    let rows = move || list.with(|v| v.display().rows.into_iter().cloned().collect::<Vec<_>>());

    view! {
        <div class="card">
            <div class="card-header">
                <h3>"Members"</h3>
                <SearchInput controls=controls placeholder="Search members..." />
            </div>
            <table class="data-table">
                <thead>
                    <tr>
                        <SortHeader controls=controls field="name" label="Member" />
                        <th>"Email"</th>
                        <th>"Organization"</th>
                        <th>"Role"</th>
                        <SortHeader controls=controls field="join_date" label="Join Date" />
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=rows
                        key=|m| m.id
                        children=move |member: Member| {
                            let status_class = match member.status {
                                MemberStatus::Active => "badge badge-primary",
                                MemberStatus::Inactive => "badge badge-muted",
                            };
                            view! {
                                <tr>
                                    <td>
                                        <div class="member-cell">
                                            <span class="avatar">{member.initials()}</span>
                                            <span class="cell-strong">{member.name.clone()}</span>
                                        </div>
                                    </td>
                                    <td class="cell-muted">{member.email.clone()}</td>
                                    <td>{member.organization.clone()}</td>
                                    <td>
                                        <span class="badge badge-outline">
                                            {member.role.clone()}
                                        </span>
                                    </td>
                                    <td>{format::date(member.join_date)}</td>
                                    <td>
                                        <span class=status_class>{member.status.as_str()}</span>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || controls.filtered_len.get() == 0>
                <p class="empty-state">"No members match your search."</p>
            </Show>
            <PaginationBar controls=controls />
        </div>
    }
    .into_any()
}
