//! Grocery List Frontend Entry Point

mod app;
mod browser;
mod components;
mod context;
mod store;

use app::App;
use grocery_core::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::load(&browser::LocalStorage);
    match console_logger::init(config.log_level(), config.log_capacity) {
        Ok(logger) => browser::expose_log_dump(logger),
        Err(e) => web_sys::console::error_1(&format!("[APP] Logger already installed: {}", e).into()),
    }
    log::info!("[APP] Starting grocery list (log level {})", config.log_level());

    mount_to_body(move || view! { <App config=config /> });
}
