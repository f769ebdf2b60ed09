//! Document Helpers

use console_logger::ConsoleLogger;
use grocery_core::Theme;
use wasm_bindgen::prelude::*;

/// Set `data-theme` on `<html>`
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
            log::warn!("[APP] Failed to apply theme: {:?}", e);
        }
    }
}

pub fn page_url() -> String {
    web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default()
}

pub fn open_in_new_tab(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.open_with_url_and_target(url, "_blank") {
        log::warn!("[SHARE] Failed to open {}: {:?}", url, e);
    }
}

/// Install `window.groceryLogs()`, returning the recent log records as text
pub fn expose_log_dump(logger: &'static ConsoleLogger) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let dump = Closure::<dyn Fn() -> String>::new(move || logger.dump());
    if let Err(e) = js_sys::Reflect::set(&window, &JsValue::from_str("groceryLogs"), dump.as_ref()) {
        log::warn!("[APP] Failed to expose log dump: {:?}", e);
    }
    // Lives for the whole page
    dump.forget();
}
