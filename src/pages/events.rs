//! Events Page
//!
//! One card per event, soonest first.

use community_admin_core::models::{Event, EventStatus};
use leptos::prelude::*;

use crate::format;
use crate::store::{use_app_store, AppStateStoreFields};

fn status_class(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Upcoming => "badge badge-primary",
        EventStatus::Ongoing => "badge badge-success",
        EventStatus::Completed => "badge badge-muted",
    }
}

#[component]
pub fn EventsPage() -> impl IntoView {
    let store = use_app_store();

    let events = move || {
        let mut events = store.events().with(|e| e.to_vec());
        events.sort_by_key(|e| e.date);
        events
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Events"</h1>
                <p class="page-subtitle">"Manage all platform events"</p>
            </div>
            <Show
                when=move || store.events().with(|e| !e.is_empty())
                fallback=|| view! { <p class="empty-state">"No events scheduled."</p> }
            >
                <div class="event-grid">
                    <For
                        each=events
                        key=|e| (e.id, e.status)
                        children=|event: Event| view! {
                            <div class="card event-card">
                                <div class="card-header">
                                    <h3>{event.title.clone()}</h3>
                                    <span class=status_class(event.status)>
                                        {event.status.as_str()}
                                    </span>
                                </div>
                                <dl class="detail-list">
                                    <dt>"Date"</dt><dd>{format::date(event.date)}</dd>
                                    <dt>"Location"</dt><dd>{event.location.clone()}</dd>
                                    <dt>"Attendees"</dt><dd>{event.attendees}</dd>
                                </dl>
                                <p class="cell-strong">{event.organization.clone()}</p>
                            </div>
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
