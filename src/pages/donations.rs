//! Donations Page

use community_admin_core::models::total_donated;
use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use crate::components::DonorTable;
use crate::context::use_app_context;
use crate::format;
use crate::store::{store_remove_donor, use_app_store, AppStateStoreFields};

#[component]
pub fn DonationsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (deleting, set_deleting) = signal::<Option<u32>>(None);

    let on_delete = Callback::new(move |donor_id: u32| {
        if deleting.get_untracked().is_some() {
            return;
        }
        set_deleting.set(Some(donor_id));
        spawn_local(async move {
            ctx.simulated_latency().await;
            match store_remove_donor(&store, donor_id) {
                Ok(()) => {
                    info!(donor = donor_id, "donation deleted");
                    ctx.notify_success("Donation deleted");
                }
                Err(err) => {
                    error!(donor = donor_id, %err, "delete failed");
                    ctx.notify_error(format!("Could not delete donation: {}", err));
                }
            }
            set_deleting.set(None);
        });
    });

    let total = move || store.donors().with(|donors| total_donated(donors.iter()));
    let count = move || store.donors().with(|donors| donors.len());

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Donations"</h1>
                <p class="page-subtitle">
                    "Track contributions from individuals, companies and partner chapters"
                </p>
            </div>
            <div class="stat-row">
                <div class="stat-card">
                    <span class="stat-label">"Total Raised"</span>
                    <strong class="stat-value">{move || format::currency(total())}</strong>
                </div>
                <div class="stat-card">
                    <span class="stat-label">"Donations"</span>
                    <strong class="stat-value">{count}</strong>
                </div>
            </div>
            <DonorTable on_delete=on_delete deleting=deleting.into() />
        </div>
    }
}
