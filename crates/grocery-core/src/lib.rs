//! Grocery List Core
//!
//! Platform-independent layers of the grocery list app:
//! - domain: items, categories and theme
//! - storage / repository: key-value persistence of the master and shopping lists
//! - view: view state plus sorting, filtering and grouping for rendering
//! - share: share text formatting and the share provider chain
//! - actions: user workflows with validation and notifications

pub mod actions;
pub mod config;
pub mod domain;
pub mod error;
pub mod repository;
pub mod share;
pub mod storage;
pub mod view;

pub use config::{AppConfig, StorageKeys};
pub use domain::{GroceryItem, ItemId, MasterItem, MasterItemDraft, ShoppingItem, Theme};
pub use error::StorageError;
pub use repository::{Clock, GroceryRepository, SystemClock};
pub use storage::{KeyValueStore, MemoryStore};
