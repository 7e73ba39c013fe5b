//! Community Admin Frontend Entry Point

mod app;
mod components;
mod context;
mod format;
mod logging;
mod pages;
mod store;

use app::{load_config, App};
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    logging::init(&config.log_filter);
    tracing::info!(page_size = config.page_size, "community admin starting");
    mount_to_body(move || view! { <App config=config /> });
}
