//! Tab Bar Component
//!
//! Switches between the master list and the shopping list.

use grocery_core::actions;
use grocery_core::view::Tab;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;

#[component]
pub fn TabBar(active_tab: Memo<Tab>) -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let select = move |tab: Tab| {
        match actions::switch_tab(&store.shopping_list().get_untracked(), tab) {
            Ok(tab) => store.view().update(|v| v.active_tab = tab),
            Err(e) => ctx.notify(e.notice()),
        }
    };

    view! {
        <nav class="tab-bar">
            {[Tab::Master, Tab::Shopping].into_iter().map(|tab| {
                let count = move || match tab {
                    Tab::Master => store.master_list().with(|l| l.len()),
                    Tab::Shopping => store.shopping_list().with(|l| l.len()),
                };
                let tab_class = move || {
                    if active_tab.get() == tab { "tab-btn active" } else { "tab-btn" }
                };
                view! {
                    <button class=tab_class on:click=move |_| select(tab)>
                        {tab.label()} " (" {count} ")"
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
