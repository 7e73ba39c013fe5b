//! Sort Header Component
//!
//! Clickable column header. The first click sorts ascending, the next one
//! flips the direction.

use community_admin_core::SortDirection;
use leptos::prelude::*;

use super::ListControls;

#[component]
pub fn SortHeader(
    controls: ListControls,
    field: &'static str,
    label: &'static str,
) -> impl IntoView {
    let indicator = move || match controls.direction_of(field) {
        Some(SortDirection::Ascending) => " ▲",
        Some(SortDirection::Descending) => " ▼",
        None => "",
    };

    view! {
        <th
            class=move || {
                if controls.direction_of(field).is_some() { "sortable sorted" } else { "sortable" }
            }
            on:click=move |_| controls.on_sort.run(field)
        >
            {label}
            <span class="sort-indicator">{indicator}</span>
        </th>
    }
}
