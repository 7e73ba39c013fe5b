//! Hierarchy Tree Component
//!
//! Country → state → city → chapter tree with per-node expand state.

use community_admin_core::{ExpandState, HierarchyTree};
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::components::{TreeNodeRow, TreeRow};
use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HierarchyTreeView() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let Some(tree) = store.hierarchy().get_untracked() else {
        return view! {
            <div class="card">
                <p class="empty-state">"Hierarchy unavailable"</p>
            </div>
        }
        .into_any();
    };

    let expand = RwSignal::new(ExpandState::with_default_depth(&tree, ctx.default_expand_depth()));
    let chapter_count = tree.chapter_count();
    let total_members = tree.total_members();
    let tree: StoredValue<HierarchyTree> = StoredValue::new(tree);

    let on_toggle = Callback::new(move |id: String| {
        tree.with_value(|tree| {
            expand.update(|state| match state.toggle(tree, &id) {
                Ok(open) => debug!(node = %id, open, "hierarchy node toggled"),
                Err(err) => warn!(%err, "toggle ignored"),
            })
        })
    });

    let rows = move || {
        tree.with_value(|tree| {
            expand.with(|state| {
                tree.visible_rows(state)
                    .into_iter()
                    .map(TreeRow::from)
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="card hierarchy-card">
            <div class="card-header">
                <div>
                    <h3>"Organization Hierarchy"</h3>
                    <p class="card-subtitle">
                        {format!("{} chapters · {} members", chapter_count, total_members)}
                    </p>
                </div>
                <div class="card-actions">
                    <button
                        class="link-btn"
                        on:click=move |_| {
                            tree.with_value(|tree| expand.update(|state| state.expand_all(tree)))
                        }
                    >
                        "Expand all"
                    </button>
                    <button
                        class="link-btn"
                        on:click=move |_| expand.update(|state| state.collapse_all())
                    >
                        "Collapse all"
                    </button>
                </div>
            </div>
            <div class="tree-view">
                <For
                    each=rows
                    key=|row| (row.id.clone(), row.expanded)
                    children=move |row| view! { <TreeNodeRow row=row on_toggle=on_toggle /> }
                />
            </div>
        </div>
    }
    .into_any()
}
