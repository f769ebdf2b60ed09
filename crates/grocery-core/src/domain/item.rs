//! Grocery Item Entities
//!
//! Master catalog entries and the shopping-list copies made from them.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use super::category::{normalize_category, DEFAULT_CATEGORY};

/// Creation timestamp in milliseconds, doubling as the item's identity
pub type ItemId = i64;

/// Read access shared by master and shopping items
///
/// Sorting, filtering and grouping are written against this trait so
/// they work for both lists.
pub trait GroceryItem: Clone {
    fn id(&self) -> ItemId;
    fn name(&self) -> &str;
    fn category(&self) -> &str;
    fn quantity(&self) -> u32;

    /// Master items have no completion state
    fn completed(&self) -> bool {
        false
    }
}

/// Reusable catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default = "default_category", deserialize_with = "deserialize_category")]
    pub category: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

/// Entry on the working shopping list, copied from a [`MasterItem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ItemId,
    pub name: String,
    #[serde(default = "default_category", deserialize_with = "deserialize_category")]
    pub category: String,
    #[serde(default = "default_quantity", deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub added_at: i64,
}

impl ShoppingItem {
    /// Copy a master item onto the shopping list, not yet completed
    pub fn from_master(item: &MasterItem, added_at: i64) -> Self {
        Self {
            id: item.id,
            name: item.name.clone(),
            category: item.category.clone(),
            quantity: item.quantity,
            completed: false,
            added_at,
        }
    }
}

/// User submission before an id has been assigned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MasterItemDraft {
    pub name: String,
    pub category: Option<String>,
    pub quantity: Option<u32>,
}

impl MasterItemDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn resolved_category(&self) -> String {
        normalize_category(self.category.as_deref().unwrap_or_default())
    }

    /// Missing or zero quantities become 1
    pub fn resolved_quantity(&self) -> u32 {
        self.quantity.filter(|q| *q > 0).unwrap_or(1)
    }
}

impl GroceryItem for MasterItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }
}

impl GroceryItem for ShoppingItem {
    fn id(&self) -> ItemId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn category(&self) -> &str {
        &self.category
    }

    fn quantity(&self) -> u32 {
        self.quantity
    }

    fn completed(&self) -> bool {
        self.completed
    }
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_quantity() -> u32 {
    1
}

fn deserialize_category<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_category(raw.as_deref().unwrap_or_default()))
}

/// Leading integer of `text`, read the way a form field is
///
/// Leading whitespace and trailing junk are ignored ("3x" is 3, "2.5" is 2).
/// Values below 1 and text without leading digits give `None`.
pub fn parse_quantity(text: &str) -> Option<u32> {
    let text = text.trim_start();
    let text = text.strip_prefix('+').unwrap_or(text);
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let value = digits
        .parse::<u64>()
        .map(|v| v.min(u32::MAX as u64) as u32)
        .unwrap_or(u32::MAX);
    (value >= 1).then_some(value)
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = match Option::<RawQuantity>::deserialize(deserializer)? {
        Some(RawQuantity::Number(q)) if q.is_finite() && q >= 1.0 => Some(q.min(u32::MAX as f64) as u32),
        Some(RawQuantity::Text(text)) => parse_quantity(&text),
        _ => None,
    };
    Ok(quantity.unwrap_or(1))
}
