//! View State
//!
//! Transient UI choices. Lives for the page session only.

use super::filter::CategoryFilter;
use super::sort::SortOrder;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Master,
    Shopping,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Master => "Master List",
            Tab::Shopping => "Shopping List",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub master_sort: SortOrder,
    pub shopping_sort: SortOrder,
    pub category_filter: CategoryFilter,
    pub master_search: String,
    pub shopping_search: String,
    pub active_tab: Tab,
}
