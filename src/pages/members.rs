//! Members Page

use community_admin_core::models::MemberStatus;
use leptos::prelude::*;

use crate::components::MembersTable;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MembersPage() -> impl IntoView {
    let store = use_app_store();

    let total = move || store.members().with(|m| m.len());
    let active = move || {
        store
            .members()
            .with(|m| m.iter().filter(|m| m.status == MemberStatus::Active).count())
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Members"</h1>
                <p class="page-subtitle">"Manage all platform members"</p>
            </div>
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-label">"Total Members"</span>
                    <strong class="stat-value">{total}</strong>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Active"</span>
                    <strong class="stat-value">{active}</strong>
                </div>
            </div>
            <MembersTable />
        </div>
    }
}
