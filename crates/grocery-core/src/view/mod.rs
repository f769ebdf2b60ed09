//! View Layer
//!
//! Explicit view state and the pure functions that turn the stored
//! lists into what the UI draws.

mod filter;
mod render;
mod sort;
mod state;

pub use filter::{filter_by_category, filter_items, CategoryFilter};
pub use render::{
    group_by_category, render_master_list, render_shopping_list, CategoryGroup, EmptyState,
    MasterListView, ShoppingListView,
};
pub use sort::{locale_cmp, sort_items, SortOrder};
pub use state::{Tab, ViewState};
