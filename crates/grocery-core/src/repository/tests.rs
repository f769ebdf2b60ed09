//! Repository Integration Tests
//!
//! Tests for GroceryRepository against an in-memory store.

#[cfg(test)]
mod tests {
    use crate::domain::{MasterItemDraft, Theme};
    use crate::repository::{GroceryRepository, ManualClock};
    use crate::storage::{KeyValueStore, MemoryStore};

    fn setup_repo(clock: &ManualClock) -> GroceryRepository<MemoryStore, &ManualClock> {
        GroceryRepository::new(MemoryStore::new(), clock)
    }

    #[test]
    fn test_add_master_item_assigns_defaults() {
        let clock = ManualClock::new(1_000);
        let repo = setup_repo(&clock);

        let created = repo
            .add_item_to_master_list(MasterItemDraft::new("Bananas"))
            .expect("Failed to add");

        assert_eq!(created.id, 1_000);
        assert_eq!(created.category, "Other");
        assert_eq!(created.quantity, 1);
        assert_eq!(repo.master_list(), vec![created]);
    }

    #[test]
    fn test_master_ids_stay_unique_within_one_millisecond() {
        let clock = ManualClock::new(5_000);
        let repo = setup_repo(&clock);

        let first = repo.add_item_to_master_list(MasterItemDraft::new("A")).unwrap();
        let second = repo.add_item_to_master_list(MasterItemDraft::new("B")).unwrap();
        clock.set(4_000);
        let third = repo.add_item_to_master_list(MasterItemDraft::new("C")).unwrap();
        clock.set(9_000);
        let fourth = repo.add_item_to_master_list(MasterItemDraft::new("D")).unwrap();

        assert_eq!(first.id, 5_000);
        assert_eq!(second.id, 5_001);
        assert_eq!(third.id, 5_002);
        assert_eq!(fourth.id, 9_000);
    }

    #[test]
    fn test_master_list_keeps_insertion_order() {
        let clock = ManualClock::new(1);
        let repo = setup_repo(&clock);
        for name in ["Zucchini", "Apples", "Milk"] {
            clock.advance(1);
            repo.add_item_to_master_list(MasterItemDraft::new(name)).unwrap();
        }
        let names: Vec<_> = repo.master_list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Zucchini", "Apples", "Milk"]);
    }

    #[test]
    fn test_delete_master_item() {
        let clock = ManualClock::new(10);
        let repo = setup_repo(&clock);
        let keep = repo.add_item_to_master_list(MasterItemDraft::new("Keep")).unwrap();
        clock.advance(1);
        let drop = repo.add_item_to_master_list(MasterItemDraft::new("Drop")).unwrap();

        assert_eq!(repo.delete_item_from_master_list(drop.id).unwrap(), 1);
        assert_eq!(repo.delete_item_from_master_list(drop.id).unwrap(), 0);
        assert_eq!(repo.master_list(), vec![keep]);
    }

    #[test]
    fn test_shopping_copy_is_independent_of_master() {
        let clock = ManualClock::new(100);
        let repo = setup_repo(&clock);
        let master = repo
            .add_item_to_master_list(MasterItemDraft::new("Milk").with_category("Dairy").with_quantity(2))
            .unwrap();
        clock.advance(50);
        let entry = repo.add_item_to_shopping_list(&master).unwrap();

        assert_eq!(entry.id, master.id);
        assert_eq!(entry.added_at, 150);
        assert!(!entry.completed);

        repo.delete_item_from_master_list(master.id).unwrap();
        assert_eq!(repo.shopping_list(), vec![entry]);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let clock = ManualClock::new(1);
        let repo = setup_repo(&clock);
        let master = repo.add_item_to_master_list(MasterItemDraft::new("Eggs")).unwrap();
        repo.add_item_to_shopping_list(&master).unwrap();

        let once = repo.toggle_item_completed(master.id).unwrap().unwrap();
        assert!(once.completed);
        let twice = repo.toggle_item_completed(master.id).unwrap().unwrap();
        assert!(!twice.completed);
        assert!(!repo.shopping_list()[0].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let clock = ManualClock::new(1);
        let repo = setup_repo(&clock);
        let master = repo.add_item_to_master_list(MasterItemDraft::new("Eggs")).unwrap();
        repo.add_item_to_shopping_list(&master).unwrap();
        let before = repo.store().get("shoppingList");

        assert!(repo.toggle_item_completed(999).unwrap().is_none());
        assert_eq!(repo.store().get("shoppingList"), before);
    }

    #[test]
    fn test_clear_completed_preserves_order_of_rest() {
        let store = MemoryStore::new();
        store
            .set(
                "shoppingList",
                r#"[
                    {"id":1,"name":"Bread","category":"Bakery","quantity":1,"completed":false,"addedAt":1},
                    {"id":2,"name":"Eggs","category":"Dairy","quantity":1,"completed":true,"addedAt":2},
                    {"id":3,"name":"Ham","category":"Meat","quantity":1,"completed":false,"addedAt":3},
                    {"id":4,"name":"Peas","category":"Frozen","quantity":1,"completed":true,"addedAt":4}
                ]"#,
            )
            .unwrap();
        let clock = ManualClock::new(10);
        let repo = GroceryRepository::new(store, &clock);

        assert_eq!(repo.clear_completed_items().unwrap(), 2);
        let ids: Vec<_> = repo.shopping_list().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_clear_all_empties_list() {
        let clock = ManualClock::new(1);
        let repo = setup_repo(&clock);
        let master = repo.add_item_to_master_list(MasterItemDraft::new("Tea")).unwrap();
        repo.add_item_to_shopping_list(&master).unwrap();

        repo.clear_all_items().unwrap();
        assert!(repo.shopping_list().is_empty());
        assert_eq!(repo.store().get("shoppingList").as_deref(), Some("[]"));

        repo.clear_all_items().unwrap();
        assert!(repo.shopping_list().is_empty());
    }

    #[test]
    fn test_corrupt_blob_reads_as_empty() {
        let store = MemoryStore::new();
        store.set("masterList", "[{\"id\":").unwrap();
        let clock = ManualClock::new(7);
        let repo = GroceryRepository::new(store, &clock);

        assert!(repo.master_list().is_empty());
        let created = repo.add_item_to_master_list(MasterItemDraft::new("Salt")).unwrap();
        assert_eq!(repo.master_list(), vec![created]);
    }

    #[test]
    fn test_odd_record_does_not_wipe_the_list() {
        let store = MemoryStore::new();
        store
            .set(
                "masterList",
                r#"[{"id":1,"name":"Milk","category":"Dairy","quantity":1},{"id":2,"name":"Eggs","category":"Dairy","quantity":"12"},{"note":"no id or name"}]"#,
            )
            .unwrap();
        let clock = ManualClock::new(10);
        let repo = GroceryRepository::new(store, &clock);

        let loaded = repo.master_list();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[1].name, "Eggs");
        assert_eq!(loaded[1].quantity, 12);

        repo.add_item_to_master_list(MasterItemDraft::new("Bread")).unwrap();
        let names: Vec<_> = repo.master_list().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Milk", "Eggs", "Bread"]);
    }

    #[test]
    fn test_theme_persists_as_plain_string() {
        let clock = ManualClock::new(1);
        let repo = setup_repo(&clock);
        assert_eq!(repo.theme(), Theme::Light);

        repo.set_theme(Theme::Dark).unwrap();
        assert_eq!(repo.store().get("theme").as_deref(), Some("dark"));
        assert_eq!(repo.theme(), Theme::Dark);
    }
}
