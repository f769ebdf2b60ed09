//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use grocery_core::actions::Notice;
use grocery_core::share::ShareData;
use grocery_core::view::ViewState;
use grocery_core::{MasterItem, ShoppingItem, Theme};
use leptos::prelude::*;
use reactive_stores::Store;

/// A notice currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub notice: Notice,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Mirror of the persisted master list
    pub master_list: Vec<MasterItem>,
    /// Mirror of the persisted shopping list
    pub shopping_list: Vec<ShoppingItem>,
    /// Sort, filter, search and tab choices
    pub view: ViewState,
    pub theme: Theme,
    pub show_add_form: bool,
    /// Payload of the open manual share modal
    pub share_modal: Option<ShareData>,
    pub notifications: Vec<Notification>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_push_notification(store: &AppStore, notification: Notification) {
    store.notifications().write().push(notification);
}

pub fn store_remove_notification(store: &AppStore, id: u64) {
    store.notifications().write().retain(|n| n.id != id);
}
