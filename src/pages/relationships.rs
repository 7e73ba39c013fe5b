//! Relationships Page
//!
//! Organizational hierarchy, chapter connection requests and collaborations.

use leptos::prelude::*;
use leptos::task::spawn_local;
use tracing::{error, info};

use crate::components::{ChaptersTable, CollaborationsTable, HierarchyTreeView};
use crate::context::use_app_context;
use crate::store::{store_send_chapter_request, use_app_store};

#[component]
pub fn RelationshipsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (sending, set_sending) = signal::<Option<u32>>(None);

    let on_send_request = Callback::new(move |chapter_id: u32| {
        if sending.get_untracked().is_some() {
            return;
        }
        set_sending.set(Some(chapter_id));
        spawn_local(async move {
            ctx.simulated_latency().await;
            match store_send_chapter_request(&store, chapter_id) {
                Ok(()) => {
                    info!(chapter = chapter_id, "connection request sent");
                    ctx.notify_success("Connection request sent");
                }
                Err(err) => {
                    error!(chapter = chapter_id, %err, "connection request failed");
                    ctx.notify_error(format!("Could not send request: {}", err));
                }
            }
            set_sending.set(None);
        });
    });

    view! {
        <div class="page">
            <div class="page-header">
                <h1>"Relationships"</h1>
                <p class="page-subtitle">
                    "Chapters, connections and collaborations across the network"
                </p>
            </div>
            <div class="page-grid">
                <HierarchyTreeView />
                <ChaptersTable on_send_request=on_send_request sending=sending.into() />
            </div>
            <CollaborationsTable />
        </div>
    }
}
