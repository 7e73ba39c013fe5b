//! Search Input Component
//!
//! Free-text filter box bound to a list view's query.

use leptos::prelude::*;

use super::ListControls;

#[component]
pub fn SearchInput(controls: ListControls, #[prop(into)] placeholder: String) -> impl IntoView {
    view! {
        <div class="search-input">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || controls.query.get()
                on:input=move |ev| controls.on_query.run(event_target_value(&ev))
            />
            <Show when=move || !controls.query.get().is_empty()>
                <button
                    class="clear-btn"
                    title="Clear search"
                    on:click=move |_| controls.on_query.run(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
