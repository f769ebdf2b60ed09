//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use grocery_core::actions::{ActionResult, Notice};
use grocery_core::{AppConfig, GroceryRepository, SystemClock};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::browser::LocalStorage;
use crate::store::{store_push_notification, store_remove_notification, AppStateStoreFields, AppStore, Notification};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<AppConfig>,
    next_notification: StoredValue<u64>,
}

impl AppContext {
    pub fn new(store: AppStore, config: AppConfig) -> Self {
        Self {
            store,
            config: StoredValue::new(config),
            next_notification: StoredValue::new(0),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Repository over `localStorage` using the configured keys
    pub fn repo(&self) -> GroceryRepository<LocalStorage> {
        let keys = self.config.with_value(|c| c.storage.clone());
        GroceryRepository::with_keys(LocalStorage, SystemClock, keys)
    }

    /// Re-read both lists from storage into the store
    pub fn reload(&self) {
        let repo = self.repo();
        let master = repo.master_list();
        let shopping = repo.shopping_list();
        log::debug!("[APP] Reloaded {} master / {} shopping items", master.len(), shopping.len());
        self.store.master_list().set(master);
        self.store.shopping_list().set(shopping);
    }

    /// Show a notice and remove it after `notification_ms`
    pub fn notify(&self, notice: Notice) {
        self.next_notification.update_value(|n| *n += 1);
        let id = self.next_notification.get_value();
        let store = self.store;
        let duration = self.config.with_value(|c| c.notification_ms);

        store_push_notification(&store, Notification { id, notice });
        spawn_local(async move {
            TimeoutFuture::new(duration).await;
            store_remove_notification(&store, id);
        });
    }

    /// Refresh the lists and surface the outcome of a workflow
    pub fn report(&self, result: ActionResult) {
        self.reload();
        match result {
            Ok(notice) => self.notify(notice),
            Err(e) => {
                log::warn!("[APP] {}", e);
                self.notify(e.notice());
            }
        }
    }
}

pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
