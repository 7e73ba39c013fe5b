//! List View Bindings
//!
//! Wraps a core `ListView` in a signal and exposes the pieces the shared
//! table controls need (search box, sort headers, pagination bar).

use community_admin_core::{ListConfig, ListView, Record, SortDirection, SortSpec};
use leptos::prelude::*;
use tracing::{error, warn};

/// Build a reactive list view, or `None` when the records do not fit the
/// configuration.
pub fn use_list_view<R>(
    name: &'static str,
    records: Vec<R>,
    config: ListConfig,
) -> Option<RwSignal<ListView<R>>>
where
    R: Record + Send + Sync + 'static,
{
    match ListView::new(records, config) {
        Ok(view) => Some(RwSignal::new(view)),
        Err(err) => {
            error!(list = name, %err, "list view rejected its records");
            None
        }
    }
}

/// Keep a list view's source in step with a store collection.
/// Query, sort and page survive the swap.
pub fn sync_source<R, F>(name: &'static str, list: RwSignal<ListView<R>>, records: F)
where
    R: Record + Send + Sync + 'static,
    F: Fn() -> Vec<R> + 'static,
{
    Effect::new(move |_| {
        let records = records();
        list.update(|view| {
            if let Err(err) = view.replace_source(records) {
                error!(list = name, %err, "list view rejected updated records");
            }
        });
    });
}

/// Type-erased handles onto one list view
#[derive(Clone, Copy)]
pub struct ListControls {
    pub query: Signal<String>,
    pub sort: Signal<Option<SortSpec>>,
    pub page: Signal<usize>,
    pub page_count: Signal<usize>,
    pub page_size: Signal<usize>,
    pub filtered_len: Signal<usize>,
    pub total_len: Signal<usize>,
    pub on_query: Callback<String>,
    pub on_sort: Callback<&'static str>,
    pub on_page: Callback<usize>,
}

impl ListControls {
    pub fn new<R>(list: RwSignal<ListView<R>>) -> Self
    where
        R: Record + Send + Sync + 'static,
    {
        Self {
            query: Signal::derive(move || list.with(|v| v.query().to_string())),
            sort: Signal::derive(move || list.with(|v| v.sort().cloned())),
            page: Signal::derive(move || list.with(|v| v.page())),
            page_count: Signal::derive(move || list.with(|v| v.page_count())),
            page_size: Signal::derive(move || list.with(|v| v.page_size())),
            filtered_len: Signal::derive(move || list.with(|v| v.filtered_len())),
            total_len: Signal::derive(move || list.with(|v| v.total_len())),
            on_query: Callback::new(move |text: String| list.update(|v| v.set_query(&text))),
            on_sort: Callback::new(move |field: &'static str| {
                list.update(|v| {
                    if let Err(err) = v.set_sort(field) {
                        warn!(field, %err, "sort request ignored");
                    }
                })
            }),
            on_page: Callback::new(move |page: usize| list.update(|v| v.set_page(page))),
        }
    }

    /// Direction of `field` if it is the active sort column
    pub fn direction_of(&self, field: &str) -> Option<SortDirection> {
        self.sort
            .get()
            .filter(|spec| spec.field == field)
            .map(|spec| spec.direction)
    }
}

/// Placeholder card for a list whose records failed validation
#[component]
pub fn ListUnavailable(title: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <p class="empty-state">"This list could not be loaded."</p>
        </div>
    }
}
