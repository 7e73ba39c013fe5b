//! Pagination Bar Component
//!
//! "Showing X to Y of Z" plus previous / numbered / next page buttons.

use leptos::prelude::*;

use super::ListControls;

#[component]
pub fn PaginationBar(controls: ListControls) -> impl IntoView {
    let summary = move || {
        let total = controls.filtered_len.get();
        if total == 0 {
            return "No results".to_string();
        }
        let size = controls.page_size.get();
        let first = (controls.page.get() - 1) * size + 1;
        let last = (first + size - 1).min(total);
        format!("Showing {} to {} of {} results", first, last, total)
    };

    let go = move |page: usize| controls.on_page.run(page);

    view! {
        <div class="pagination-bar">
            <span class="pagination-summary">{summary}</span>
            <div class="pagination-buttons">
                <button
                    class="page-btn"
                    disabled=move || controls.page.get() <= 1
                    on:click=move |_| go(controls.page.get().saturating_sub(1))
                >
                    "Previous"
                </button>
                {move || {
                    (1..=controls.page_count.get())
                        .map(|n| {
                            view! {
                                <button
                                    class=move || {
                                        if controls.page.get() == n {
                                            "page-btn active"
                                        } else {
                                            "page-btn"
                                        }
                                    }
                                    on:click=move |_| go(n)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }}
                <button
                    class="page-btn"
                    disabled=move || controls.page.get() >= controls.page_count.get()
                    on:click=move |_| go(controls.page.get() + 1)
                >
                    "Next"
                </button>
            </div>
        </div>
    }
}
