//! Organizations Page
//!
//! Partner organizations with a detail card for the selected row.

use leptos::prelude::*;

use crate::components::OrganizationsTable;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OrganizationsPage() -> impl IntoView {
    let store = use_app_store();
    let (selected, set_selected) = signal::<Option<u32>>(None);

    let on_select = Callback::new(move |id: u32| {
        set_selected.update(|current| {
            *current = if *current == Some(id) { None } else { Some(id) };
        })
    });

    let details = move || {
        let id = selected.get()?;
        store.organizations().with(|orgs| orgs.get(&id).cloned())
    };

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Organizations"</h1>
                <p class="page-subtitle">"Partner organizations and their activity"</p>
            </div>
            <OrganizationsTable on_select=on_select selected=selected.into() />
            {move || details().map(|org| view! {
                <div class="card detail-card">
                    <div class="card-header">
                        <h3>{org.name.clone()}</h3>
                        <button class="link-btn" on:click=move |_| set_selected.set(None)>
                            "Close"
                        </button>
                    </div>
                    <dl class="detail-list">
                        <dt>"Type"</dt><dd>{org.org_type.clone()}</dd>
                        <dt>"Members"</dt><dd>{org.members}</dd>
                        <dt>"Events"</dt><dd>{org.events}</dd>
                        <dt>"Status"</dt><dd>{org.status.as_str()}</dd>
                        <dt>"Contact"</dt><dd>{org.contact.clone()}</dd>
                    </dl>
                </div>
            })}
        </div>
    }
}
