//! Application Configuration
//!
//! Every field has a default; an optional JSON object stored under
//! [`CONFIG_KEY`] overrides individual fields.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::storage::{load_or_default, KeyValueStore};

/// Storage key holding configuration overrides
pub const CONFIG_KEY: &str = "groceryConfig";

/// Keys of the persisted collections
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorageKeys {
    pub master_list: String,
    pub shopping_list: String,
    pub theme: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            master_list: "masterList".to_string(),
            shopping_list: "shoppingList".to_string(),
            theme: "theme".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub storage: StorageKeys,
    /// Title used in shared text and as the email subject
    pub share_title: String,
    /// How long a notification stays on screen
    pub notification_ms: u32,
    /// How long the share modal shows "Copied!"
    pub copy_feedback_ms: u32,
    /// One of off/error/warn/info/debug/trace
    pub log_level: String,
    /// Number of recent log records kept in memory
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageKeys::default(),
            share_title: "My Grocery List".to_string(),
            notification_ms: 3000,
            copy_feedback_ms: 2000,
            log_level: "info".to_string(),
            log_capacity: 200,
        }
    }
}

impl AppConfig {
    /// Read overrides from the store, never failing
    pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Self {
        load_or_default(store, CONFIG_KEY)
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
