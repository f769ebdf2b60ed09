//! App Header Component
//!
//! Title and the light/dark toggle.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn AppHeader() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let toggle_theme = move |_| {
        let next = store.theme().get_untracked().toggled();
        if let Err(e) = ctx.repo().set_theme(next) {
            log::warn!("[APP] Failed to save theme: {}", e);
        }
        store.theme().set(next);
    };

    view! {
        <header class="app-header">
            <h1>"🛒 Grocery List"</h1>
            <button id="theme-toggle" class="theme-toggle" title="Toggle theme" on:click=toggle_theme>
                {move || store.theme().get().toggle_icon()}
            </button>
        </header>
    }
}
