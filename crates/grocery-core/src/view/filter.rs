//! Filtering

use crate::domain::GroceryItem;

/// Shopping list category filter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn from_value(value: &str) -> Self {
        match value {
            "all" => CategoryFilter::All,
            category => CategoryFilter::Only(category.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, CategoryFilter::All)
    }

    /// Exact, case-sensitive match
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }
}

pub fn filter_by_category<T: GroceryItem>(items: &[T], filter: &CategoryFilter) -> Vec<T> {
    items
        .iter()
        .filter(|item| filter.matches(item.category()))
        .cloned()
        .collect()
}

/// Case-insensitive substring search over name and category
///
/// An empty term returns everything.
pub fn filter_items<T: GroceryItem>(items: &[T], term: &str) -> Vec<T> {
    if term.is_empty() {
        return items.to_vec();
    }
    let needle = term.to_lowercase();
    items
        .iter()
        .filter(|item| {
            item.name().to_lowercase().contains(&needle)
                || item.category().to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MasterItem;

    fn make_item(id: i64, name: &str, category: &str) -> MasterItem {
        MasterItem {
            id,
            name: name.to_string(),
            category: category.to_string(),
            quantity: 1,
        }
    }

    fn sample() -> Vec<MasterItem> {
        vec![
            make_item(1, "Milk", "Dairy"),
            make_item(2, "Cheddar", "Dairy"),
            make_item(3, "Carrots", "Produce"),
        ]
    }

    #[test]
    fn test_all_is_identity() {
        assert_eq!(filter_by_category(&sample(), &CategoryFilter::All), sample());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let dairy = filter_by_category(&sample(), &CategoryFilter::from_value("Dairy"));
        assert_eq!(dairy.len(), 2);
        let lower = filter_by_category(&sample(), &CategoryFilter::from_value("dairy"));
        assert!(lower.is_empty());
    }

    #[test]
    fn test_search_matches_name_or_category() {
        let found = filter_items(&sample(), "CAR");
        assert_eq!(found.iter().map(|i| i.id).collect::<Vec<_>>(), vec![3]);

        let found = filter_items(&sample(), "dai");
        assert_eq!(found.len(), 2);

        assert_eq!(filter_items(&sample(), ""), sample());
        assert!(filter_items(&sample(), "bread").is_empty());
    }

    #[test]
    fn test_filter_value_round_trip() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_value("Meat").as_str(), "Meat");
        assert!(CategoryFilter::All.is_all());
    }
}
