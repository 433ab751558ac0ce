//! Todo List Frontend Entry Point

mod app;
mod components;
mod context;
mod logger;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;
use todo_core::TodoConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = TodoConfig::default();
    logger::init(config.log_level);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
