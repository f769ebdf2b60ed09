//! Domain Layer
//!
//! Grocery entities and the small value types around them.
//! This layer has no dependencies beyond serde.

mod category;
mod item;
mod theme;

pub use category::{category_emoji, normalize_category, CATEGORIES, DEFAULT_CATEGORY};
pub use item::{parse_quantity, GroceryItem, ItemId, MasterItem, MasterItemDraft, ShoppingItem};
pub use theme::Theme;
