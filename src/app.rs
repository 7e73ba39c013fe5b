//! Community Admin App
//!
//! Sidebar layout with one page per navigation entry.

use leptos::prelude::*;

use crate::components::{Sidebar, ToastStack};
use crate::context::{AppContext, NavPage};
use crate::pages::{
    ComingSoonPage, DashboardPage, DonationsPage, EventsPage, MembersPage, OrganizationsPage,
    RelationshipsPage, SponsorshipsPage, VolunteeringPage,
};
use crate::store::{AppState, AppStore};
use community_admin_core::{DashboardConfig, SampleData};

const CONFIG_JSON: &str = include_str!("../config/dashboard.json");

/// Embedded dashboard settings, defaults when the file does not parse
pub fn load_config() -> DashboardConfig {
    DashboardConfig::from_json(CONFIG_JSON).unwrap_or_else(|err| {
        web_sys::console::warn_1(&format!("[APP] config rejected, using defaults: {}", err).into());
        DashboardConfig::default()
    })
}

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let current_page = signal(NavPage::Relationships);
    let toasts = signal(Vec::new());

    // Provide context to all children
    provide_context(AppContext::new(current_page, toasts, config));
    provide_context(AppStore::new(AppState::load(&SampleData)));

    let ctx = crate::context::use_app_context();

    view! {
        <div class="admin-layout">
            <Sidebar />

            <main class="main-content">
                {move || match ctx.current_page.get() {
                    NavPage::Dashboard => view! { <DashboardPage /> }.into_any(),
                    NavPage::Members => view! { <MembersPage /> }.into_any(),
                    NavPage::Events => view! { <EventsPage /> }.into_any(),
                    NavPage::Organizations => view! { <OrganizationsPage /> }.into_any(),
                    NavPage::Donations => view! { <DonationsPage /> }.into_any(),
                    NavPage::Sponsorships => view! { <SponsorshipsPage /> }.into_any(),
                    NavPage::Volunteering => view! { <VolunteeringPage /> }.into_any(),
                    NavPage::Relationships => view! { <RelationshipsPage /> }.into_any(),
                    page => view! { <ComingSoonPage page=page /> }.into_any(),
                }}
            </main>

            <ToastStack />
        </div>
    }
}
