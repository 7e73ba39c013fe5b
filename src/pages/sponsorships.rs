//! Sponsorships Page

use leptos::prelude::*;

use crate::components::PackagesTable;
use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SponsorshipsPage() -> impl IntoView {
    let store = use_app_store();

    let delivered = move || {
        store
            .packages()
            .with(|p| p.iter().filter(|p| p.is_delivered()).count())
    };
    let pending = move || {
        store
            .packages()
            .with(|p| p.iter().filter(|p| !p.is_delivered()).count())
    };
    let value = move || store.packages().with(|p| p.iter().map(|p| p.value()).sum::<u64>());

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Sponsorships"</h1>
                <p class="page-subtitle">"Sponsorship packages and their delivery status"</p>
            </div>
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-label">"Package Value"</span>
                    <strong class="stat-value">{move || format::currency(value())}</strong>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Delivered"</span>
                    <strong class="stat-value">{delivered}</strong>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Pending"</span>
                    <strong class="stat-value">{pending}</strong>
                </div>
            </div>
            <PackagesTable />
        </div>
    }
}
