//! Tree Node Row Component
//!
//! Individual node in the hierarchy tree.

use community_admin_core::{NodeKind, VisibleRow};
use leptos::prelude::*;

/// Owned snapshot of a visible hierarchy row
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    pub id: String,
    pub name: String,
    pub kind: NodeKind,
    pub annotation: Option<String>,
    pub depth: usize,
    pub indent_px: usize,
    pub has_children: bool,
    pub expanded: bool,
}

impl From<VisibleRow<'_>> for TreeRow {
    fn from(row: VisibleRow<'_>) -> Self {
        Self {
            id: row.node.id.clone(),
            name: row.node.name.clone(),
            kind: row.node.kind,
            annotation: row.node.member_annotation(),
            depth: row.depth,
            indent_px: row.indent_px(),
            has_children: row.has_children,
            expanded: row.expanded,
        }
    }
}

/// A single node row in the tree
#[component]
pub fn TreeNodeRow(row: TreeRow, on_toggle: Callback<String>) -> impl IntoView {
    let id = row.id.clone();
    let icon = row.kind.icon().map(|icon| icon.glyph());

    view! {
        <div
            class="tree-node-row"
            data-depth=row.depth
            style=format!("padding-left: {}px;", row.indent_px)
        >
            // Expand toggle
            {if row.has_children {
                view! {
                    <button class="collapse-btn" on:click=move |_| on_toggle.run(id.clone())>
                        {if row.expanded { "▼" } else { "▶" }}
                    </button>
                }.into_any()
            } else {
                view! { <span class="collapse-placeholder"></span> }.into_any()
            }}

            {icon.map(|glyph| view! { <span class="node-icon">{glyph}</span> })}

            <span class=row.kind.label_class()>{row.name}</span>

            {row.annotation.map(|text| view! { <span class="node-annotation">{text}</span> })}
        </div>
    }
}
