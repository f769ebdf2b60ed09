//! Sorting

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::domain::GroceryItem;

/// Sort choice from the sort dropdowns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    QuantityAsc,
    QuantityDesc,
    CategoryAsc,
    CategoryDesc,
    CompletedAsc,
    CompletedDesc,
    /// Keep stored order; what any unrecognized value maps to
    Insertion,
}

impl SortOrder {
    /// Choices offered for the master list
    pub const MASTER_OPTIONS: [SortOrder; 6] = [
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::QuantityAsc,
        SortOrder::QuantityDesc,
        SortOrder::CategoryAsc,
        SortOrder::CategoryDesc,
    ];

    /// Choices offered for the shopping list
    pub const SHOPPING_OPTIONS: [SortOrder; 8] = [
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::QuantityAsc,
        SortOrder::QuantityDesc,
        SortOrder::CategoryAsc,
        SortOrder::CategoryDesc,
        SortOrder::CompletedAsc,
        SortOrder::CompletedDesc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::QuantityAsc => "quantity-asc",
            SortOrder::QuantityDesc => "quantity-desc",
            SortOrder::CategoryAsc => "category-asc",
            SortOrder::CategoryDesc => "category-desc",
            SortOrder::CompletedAsc => "completed-asc",
            SortOrder::CompletedDesc => "completed-desc",
            SortOrder::Insertion => "none",
        }
    }

    pub fn from_value(value: &str) -> Self {
        match value {
            "name-asc" => SortOrder::NameAsc,
            "name-desc" => SortOrder::NameDesc,
            "quantity-asc" => SortOrder::QuantityAsc,
            "quantity-desc" => SortOrder::QuantityDesc,
            "category-asc" => SortOrder::CategoryAsc,
            "category-desc" => SortOrder::CategoryDesc,
            "completed-asc" => SortOrder::CompletedAsc,
            "completed-desc" => SortOrder::CompletedDesc,
            _ => SortOrder::Insertion,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
            SortOrder::QuantityAsc => "Quantity (Low-High)",
            SortOrder::QuantityDesc => "Quantity (High-Low)",
            SortOrder::CategoryAsc => "Category (A-Z)",
            SortOrder::CategoryDesc => "Category (Z-A)",
            SortOrder::CompletedAsc => "To buy first",
            SortOrder::CompletedDesc => "Completed first",
            SortOrder::Insertion => "Date added",
        }
    }
}

/// Base letters only: NFD with combining marks removed, lowercased
fn collation_key(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Human-order string comparison
///
/// Accents and case are ignored first. Ties put unaccented before
/// accented, then lowercase before uppercase.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Stable sort into a new vector; the input is left untouched
pub fn sort_items<T: GroceryItem>(items: &[T], order: SortOrder) -> Vec<T> {
    let mut sorted = items.to_vec();
    match order {
        SortOrder::NameAsc => sorted.sort_by(|a, b| locale_cmp(a.name(), b.name())),
        SortOrder::NameDesc => sorted.sort_by(|a, b| locale_cmp(b.name(), a.name())),
        SortOrder::QuantityAsc => sorted.sort_by_key(|item| item.quantity()),
        SortOrder::QuantityDesc => sorted.sort_by(|a, b| b.quantity().cmp(&a.quantity())),
        SortOrder::CategoryAsc => sorted.sort_by(|a, b| locale_cmp(a.category(), b.category())),
        SortOrder::CategoryDesc => sorted.sort_by(|a, b| locale_cmp(b.category(), a.category())),
        SortOrder::CompletedAsc => sorted.sort_by_key(|item| item.completed()),
        SortOrder::CompletedDesc => sorted.sort_by(|a, b| b.completed().cmp(&a.completed())),
        SortOrder::Insertion => {}
    }
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ShoppingItem;

    fn make_item(id: i64, name: &str, category: &str, quantity: u32, completed: bool) -> ShoppingItem {
        ShoppingItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity,
            completed,
            added_at: id,
        }
    }

    fn ids(items: &[ShoppingItem]) -> Vec<i64> {
        items.iter().map(|i| i.id).collect()
    }

    fn sample() -> Vec<ShoppingItem> {
        vec![
            make_item(1, "milk", "Dairy", 2, true),
            make_item(2, "Apples", "Produce", 6, false),
            make_item(3, "bread", "Bakery", 1, false),
            make_item(4, "Butter", "Dairy", 2, true),
        ]
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let sorted = sort_items(&sample(), SortOrder::NameAsc);
        assert_eq!(ids(&sorted), vec![2, 3, 4, 1]);

        let names: Vec<_> = sorted.iter().map(|i| i.name.as_str()).collect();
        assert!(names.windows(2).all(|w| locale_cmp(w[0], w[1]) != Ordering::Greater));

        let sorted = sort_items(&sample(), SortOrder::NameDesc);
        assert_eq!(ids(&sorted), vec![1, 4, 3, 2]);
    }

    #[test]
    fn test_quantity_sort_is_stable() {
        assert_eq!(ids(&sort_items(&sample(), SortOrder::QuantityAsc)), vec![3, 1, 4, 2]);
        assert_eq!(ids(&sort_items(&sample(), SortOrder::QuantityDesc)), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_category_sort() {
        assert_eq!(ids(&sort_items(&sample(), SortOrder::CategoryAsc)), vec![3, 1, 4, 2]);
        assert_eq!(ids(&sort_items(&sample(), SortOrder::CategoryDesc)), vec![2, 1, 4, 3]);
    }

    #[test]
    fn test_completed_sort_puts_false_first_ascending() {
        assert_eq!(ids(&sort_items(&sample(), SortOrder::CompletedAsc)), vec![2, 3, 1, 4]);
        assert_eq!(ids(&sort_items(&sample(), SortOrder::CompletedDesc)), vec![1, 4, 2, 3]);
    }

    #[test]
    fn test_unknown_value_keeps_order() {
        let order = SortOrder::from_value("price-asc");
        assert_eq!(order, SortOrder::Insertion);
        assert_eq!(sort_items(&sample(), order), sample());
    }

    #[test]
    fn test_sort_never_drops_or_mutates() {
        let items = sample();
        for order in SortOrder::SHOPPING_OPTIONS {
            let mut sorted = sort_items(&items, order);
            sorted.sort_by_key(|i| i.id);
            assert_eq!(sorted, items, "{}", order.as_str());
        }
    }

    #[test]
    fn test_value_round_trip() {
        for order in SortOrder::SHOPPING_OPTIONS {
            assert_eq!(SortOrder::from_value(order.as_str()), order);
        }
    }

    #[test]
    fn test_locale_cmp_ties() {
        assert_eq!(locale_cmp("apple", "Apple"), Ordering::Less);
        assert_eq!(locale_cmp("Apple", "banana"), Ordering::Less);
        assert_eq!(locale_cmp("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accented_names_sort_with_their_base_letter() {
        let items = vec![
            make_item(1, "Zucchini", "Produce", 1, false),
            make_item(2, "Éclair", "Bakery", 1, false),
            make_item(3, "Banana", "Produce", 1, false),
            make_item(4, "crème fraîche", "Dairy", 1, false),
        ];
        let names: Vec<_> = sort_items(&items, SortOrder::NameAsc).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Banana", "crème fraîche", "Éclair", "Zucchini"]);

        assert_eq!(locale_cmp("eclair", "éclair"), Ordering::Less);
        assert_eq!(locale_cmp("Ñame", "Oats"), Ordering::Less);
    }
}
