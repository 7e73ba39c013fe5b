use leptos::prelude::*;

use crate::context::NavPage;

/// Card shown for sections that are not built yet
#[component]
pub fn ComingSoonPage(page: NavPage) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1>{page.label()}</h1>
            </div>
            <div class="card coming-soon">
                <span class="coming-soon-icon">{page.icon()}</span>
                <p>{format!("{} management is coming soon.", page.label())}</p>
            </div>
        </div>
    }
}
