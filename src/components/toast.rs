//! Toast Stack Component
//!
//! Bottom-right notifications pushed through `AppContext`.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.class()>
                            <span class="toast-message">{toast.message.clone()}</span>
                            <button class="toast-close" on:click=move |_| ctx.dismiss_toast(id)>
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
