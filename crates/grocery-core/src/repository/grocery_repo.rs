//! Grocery Repository
//!
//! Every mutation reads the whole collection, changes it and writes it
//! back under its key. There are no partial writes.

use crate::config::StorageKeys;
use crate::domain::{ItemId, MasterItem, MasterItemDraft, ShoppingItem, Theme};
use crate::error::StorageError;
use crate::storage::{load_records, save, KeyValueStore};

use super::clock::{Clock, SystemClock};

pub struct GroceryRepository<S, C = SystemClock> {
    store: S,
    clock: C,
    keys: StorageKeys,
}

impl<S: KeyValueStore, C: Clock> GroceryRepository<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self::with_keys(store, clock, StorageKeys::default())
    }

    pub fn with_keys(store: S, clock: C, keys: StorageKeys) -> Self {
        Self { store, clock, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================
    // Master List
    // ========================

    pub fn master_list(&self) -> Vec<MasterItem> {
        load_records(&self.store, &self.keys.master_list)
    }

    pub fn find_master_item(&self, id: ItemId) -> Option<MasterItem> {
        self.master_list().into_iter().find(|item| item.id == id)
    }

    /// Append a new catalog entry stamped with the current time
    ///
    /// Duplicate detection is the caller's job. An id never repeats: if
    /// the clock has not moved past the newest stored id, the next
    /// integer is used instead.
    pub fn add_item_to_master_list(&self, draft: MasterItemDraft) -> Result<MasterItem, StorageError> {
        let mut list = self.master_list();
        let now = self.clock.now_millis();
        let id = match list.iter().map(|item| item.id).max() {
            Some(last) if last >= now => last + 1,
            _ => now,
        };

        let item = MasterItem {
            id,
            category: draft.resolved_category(),
            quantity: draft.resolved_quantity(),
            name: draft.name,
        };
        list.push(item.clone());
        save(&self.store, &self.keys.master_list, &list)?;
        log::debug!("[STORAGE] Added master item {} ({})", item.id, item.name);
        Ok(item)
    }

    /// Remove every entry with this id; returns how many went
    pub fn delete_item_from_master_list(&self, id: ItemId) -> Result<usize, StorageError> {
        let mut list = self.master_list();
        let before = list.len();
        list.retain(|item| item.id != id);
        save(&self.store, &self.keys.master_list, &list)?;
        Ok(before - list.len())
    }

    // ========================
    // Shopping List
    // ========================

    pub fn shopping_list(&self) -> Vec<ShoppingItem> {
        load_records(&self.store, &self.keys.shopping_list)
    }

    pub fn add_item_to_shopping_list(&self, item: &MasterItem) -> Result<ShoppingItem, StorageError> {
        let mut list = self.shopping_list();
        let entry = ShoppingItem::from_master(item, self.clock.now_millis());
        list.push(entry.clone());
        save(&self.store, &self.keys.shopping_list, &list)?;
        log::debug!("[STORAGE] Added shopping item {} ({})", entry.id, entry.name);
        Ok(entry)
    }

    /// Flip `completed` on the matching entry
    ///
    /// Returns the updated entry, or `None` without writing when no
    /// entry has this id.
    pub fn toggle_item_completed(&self, id: ItemId) -> Result<Option<ShoppingItem>, StorageError> {
        let mut list = self.shopping_list();
        let Some(entry) = list.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };
        entry.completed = !entry.completed;
        let updated = entry.clone();
        save(&self.store, &self.keys.shopping_list, &list)?;
        Ok(Some(updated))
    }

    /// Drop completed entries, keeping the rest in order; returns how many went
    pub fn clear_completed_items(&self) -> Result<usize, StorageError> {
        let mut list = self.shopping_list();
        let before = list.len();
        list.retain(|item| !item.completed);
        save(&self.store, &self.keys.shopping_list, &list)?;
        Ok(before - list.len())
    }

    pub fn clear_all_items(&self) -> Result<(), StorageError> {
        save(&self.store, &self.keys.shopping_list, &Vec::<ShoppingItem>::new())
    }

    // ========================
    // Theme
    // ========================

    /// Stored as a bare string, not JSON
    pub fn theme(&self) -> Theme {
        self.store
            .get(&self.keys.theme)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default()
    }

    pub fn set_theme(&self, theme: Theme) -> Result<(), StorageError> {
        self.store.set(&self.keys.theme, theme.as_str())
    }
}
