//! Item Categories

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "Other";

/// Categories offered by the add form and the shopping filter bar
pub const CATEGORIES: [&str; 7] = [
    "Produce",
    "Dairy",
    "Meat",
    "Pantry",
    "Frozen",
    "Bakery",
    "Other",
];

/// Emoji shown next to a category heading
pub fn category_emoji(category: &str) -> &'static str {
    match category {
        "Produce" => "🥬",
        "Dairy" => "🥛",
        "Meat" => "🥩",
        "Pantry" => "🥫",
        "Frozen" => "🧊",
        "Bakery" => "🍞",
        _ => "📦",
    }
}

/// Blank categories collapse to [`DEFAULT_CATEGORY`]
pub fn normalize_category(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}
