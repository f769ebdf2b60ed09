//! Grocery List Frontend App
//!
//! Header, tab bar and the two list panels.

use grocery_core::view::Tab;
use grocery_core::AppConfig;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::browser;
use crate::components::{AppHeader, MasterPanel, NotificationStack, ShareModal, ShoppingPanel, TabBar};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(store, config);
    provide_context(ctx);

    store.theme().set(ctx.repo().theme());
    ctx.reload();

    // Keep <html data-theme> in sync
    Effect::new(move |_| browser::apply_theme(store.theme().get()));

    let active_tab = Memo::new(move |_| store.view().with(|v| v.active_tab));

    view! {
        <div class="container">
            <AppHeader />
            <TabBar active_tab=active_tab />
            {move || match active_tab.get() {
                Tab::Master => view! { <MasterPanel /> }.into_any(),
                Tab::Shopping => view! { <ShoppingPanel /> }.into_any(),
            }}
            <ShareModal />
            <NotificationStack />
        </div>
    }
}
