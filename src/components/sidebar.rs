use leptos::prelude::*;

use crate::context::{use_app_context, NavPage};

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <span class="brand-mark">"◆"</span>
                <h2>"Community Admin"</h2>
            </div>

            <ul class="nav-list">
                {NavPage::ALL.into_iter().map(|page| {
                    let is_active = move || ctx.current_page.get() == page;
                    view! {
                        <li
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{page.icon()}</span>
                            <span class="nav-label">{page.label()}</span>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </aside>
    }
}
