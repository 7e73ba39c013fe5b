//! Volunteering Page

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use crate::components::{AddVolunteerForm, VolunteerListTable};
use crate::context::use_app_context;
use crate::store::{store_add_volunteer, use_app_store, NewVolunteer};

#[component]
pub fn VolunteeringPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (submitting, set_submitting) = signal(false);

    let on_submit = Callback::new(move |new: NewVolunteer| {
        set_submitting.set(true);
        spawn_local(async move {
            ctx.simulated_latency().await;
            match store_add_volunteer(&store, new) {
                Ok(volunteer) => {
                    info!(volunteer = volunteer.id, "volunteer added");
                    ctx.notify_success(format!("{} added to volunteers", volunteer.name));
                }
                Err(err) => {
                    error!(%err, "add volunteer failed");
                    ctx.notify_error(format!("Could not add volunteer: {}", err));
                }
            }
            set_submitting.set(false);
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Volunteering"</h1>
                <p class="page-subtitle">"Volunteer roster and shift slots"</p>
            </div>
            <div class="page-grid">
                <VolunteerListTable />
                <AddVolunteerForm on_submit=on_submit submitting=submitting.into() />
            </div>
        </div>
    }
}
