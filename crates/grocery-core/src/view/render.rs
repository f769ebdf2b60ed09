//! Render Models
//!
//! Everything the list components need, computed from the stored
//! items and the view state. The components only draw these.

use std::collections::BTreeMap;

use crate::domain::{category_emoji, normalize_category, GroceryItem, MasterItem, ShoppingItem};

use super::filter::{filter_by_category, filter_items, CategoryFilter};
use super::sort::{sort_items, SortOrder};
use super::state::ViewState;

/// Placeholder shown instead of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    NoMasterItems,
    NoShoppingItems,
    NoItemsInCategory,
}

impl EmptyState {
    pub fn icon(&self) -> &'static str {
        match self {
            EmptyState::NoMasterItems => "📦",
            EmptyState::NoShoppingItems => "🛒",
            EmptyState::NoItemsInCategory => "🔍",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::NoMasterItems => "No items in master list",
            EmptyState::NoShoppingItems => "Shopping list is empty",
            EmptyState::NoItemsInCategory => "No items in this category",
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            EmptyState::NoMasterItems => "Add items to your master inventory to get started!",
            EmptyState::NoShoppingItems => "Add items from your master list to start shopping!",
            EmptyState::NoItemsInCategory => {
                "Try selecting a different category or add more items to your shopping list."
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<T> {
    pub category: String,
    pub emoji: &'static str,
    pub items: Vec<T>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MasterListView {
    pub groups: Vec<CategoryGroup<MasterItem>>,
    pub empty: Option<EmptyState>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingListView {
    /// Entries not yet completed
    pub active: usize,
    pub total: usize,
    /// Hidden when there is nothing to filter
    pub show_filter_bar: bool,
    pub active_filter: CategoryFilter,
    pub items: Vec<ShoppingItem>,
    pub empty: Option<EmptyState>,
}

impl ShoppingListView {
    pub fn status_line(&self) -> String {
        format!("{}/{} items", self.active, self.total)
    }
}

/// Group by category (blank → "Other"), groups in category name order,
/// items inside each group in `order`
pub fn group_by_category<T: GroceryItem>(items: &[T], order: SortOrder) -> Vec<CategoryGroup<T>> {
    let mut grouped: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for item in items {
        grouped
            .entry(normalize_category(item.category()))
            .or_default()
            .push(item.clone());
    }

    grouped
        .into_iter()
        .map(|(category, members)| CategoryGroup {
            emoji: category_emoji(&category),
            items: sort_items(&members, order),
            category,
        })
        .collect()
}

pub fn render_master_list(items: &[MasterItem], state: &ViewState) -> MasterListView {
    let visible = filter_items(items, &state.master_search);
    if visible.is_empty() {
        return MasterListView {
            groups: Vec::new(),
            empty: Some(EmptyState::NoMasterItems),
        };
    }
    MasterListView {
        groups: group_by_category(&visible, state.master_sort),
        empty: None,
    }
}

/// Counts and the filter bar reflect the searched list before the
/// category filter is applied
pub fn render_shopping_list(items: &[ShoppingItem], state: &ViewState) -> ShoppingListView {
    let searched = filter_items(items, &state.shopping_search);
    let total = searched.len();
    let active = searched.iter().filter(|item| !item.completed).count();

    let shown = sort_items(
        &filter_by_category(&searched, &state.category_filter),
        state.shopping_sort,
    );

    let empty = if searched.is_empty() {
        Some(EmptyState::NoShoppingItems)
    } else if shown.is_empty() && !state.category_filter.is_all() {
        Some(EmptyState::NoItemsInCategory)
    } else {
        None
    };

    ShoppingListView {
        active,
        total,
        show_filter_bar: total > 0,
        active_filter: state.category_filter.clone(),
        items: shown,
        empty,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn master(id: i64, name: &str, category: &str, quantity: u32) -> MasterItem {
        MasterItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
        }
    }

    fn shopping(id: i64, name: &str, category: &str, completed: bool) -> ShoppingItem {
        ShoppingItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity: 1,
            completed,
            added_at: id,
        }
    }

    #[test]
    fn test_empty_master_list() {
        let view = render_master_list(&[], &ViewState::default());
        assert_eq!(view.empty, Some(EmptyState::NoMasterItems));
        assert!(view.groups.is_empty());
    }

    #[test]
    fn test_master_groups_sorted_by_category_then_sort_order() {
        let items = vec![
            master(1, "Yogurt", "Dairy", 1),
            master(2, "Steak", "Meat", 1),
            master(3, "Butter", "Dairy", 5),
            master(4, "Foil", "", 1),
        ];
        let mut state = ViewState::default();
        let view = render_master_list(&items, &state);

        let categories: Vec<_> = view.groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["Dairy", "Meat", "Other"]);
        assert_eq!(view.groups[0].emoji, "🥛");
        let dairy: Vec<_> = view.groups[0].items.iter().map(|i| i.id).collect();
        assert_eq!(dairy, vec![3, 1]);

        state.master_sort = SortOrder::QuantityAsc;
        let view = render_master_list(&items, &state);
        let dairy: Vec<_> = view.groups[0].items.iter().map(|i| i.id).collect();
        assert_eq!(dairy, vec![1, 3]);
    }

    #[test]
    fn test_master_search_with_no_hits_shows_empty_state() {
        let items = vec![master(1, "Yogurt", "Dairy", 1)];
        let state = ViewState {
            master_search: "zzz".to_string(),
            ..Default::default()
        };
        assert_eq!(render_master_list(&items, &state).empty, Some(EmptyState::NoMasterItems));
    }

    #[test]
    fn test_shopping_counts_and_filter_bar() {
        let items = vec![
            shopping(1, "Milk", "Dairy", false),
            shopping(2, "Bread", "Bakery", true),
            shopping(3, "Cheese", "Dairy", false),
        ];
        let view = render_shopping_list(&items, &ViewState::default());
        assert_eq!(view.status_line(), "2/3 items");
        assert!(view.show_filter_bar);
        assert_eq!(view.empty, None);
        let names: Vec<_> = view.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Bread", "Cheese", "Milk"]);
    }

    #[test]
    fn test_empty_shopping_list_hides_filter_bar() {
        let state = ViewState {
            category_filter: CategoryFilter::from_value("Meat"),
            ..Default::default()
        };
        let view = render_shopping_list(&[], &state);
        assert_eq!(view.empty, Some(EmptyState::NoShoppingItems));
        assert!(!view.show_filter_bar);
        assert_eq!(view.status_line(), "0/0 items");
    }

    #[test]
    fn test_category_with_no_matches() {
        let items = vec![shopping(1, "Milk", "Dairy", false)];
        let state = ViewState {
            category_filter: CategoryFilter::from_value("Frozen"),
            ..Default::default()
        };
        let view = render_shopping_list(&items, &state);
        assert_eq!(view.empty, Some(EmptyState::NoItemsInCategory));
        assert!(view.show_filter_bar);
        assert_eq!(view.status_line(), "1/1 items");
        assert!(view.items.is_empty());
    }

    #[test]
    fn test_category_filter_applies_before_sort() {
        let items = vec![
            shopping(1, "Yogurt", "Dairy", true),
            shopping(2, "Bread", "Bakery", false),
            shopping(3, "Cream", "Dairy", false),
        ];
        let state = ViewState {
            category_filter: CategoryFilter::from_value("Dairy"),
            shopping_sort: SortOrder::CompletedAsc,
            ..Default::default()
        };
        let view = render_shopping_list(&items, &state);
        let ids: Vec<_> = view.items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
        assert_eq!(view.active_filter.as_str(), "Dairy");
    }
}
