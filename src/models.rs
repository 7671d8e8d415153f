//! Frontend Models
//!
//! Data structures matching the shop API payloads.

use serde::{de, Deserialize, Deserializer, Serialize};

/// Catalog item identifier (stable across sessions)
pub type ItemId = u32;

/// Aircraft category (fixed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Multi-role", alias = "Многоцелевой")]
    MultiRole,
    #[serde(rename = "Interceptor", alias = "Истребитель-перехватчик")]
    Interceptor,
    #[serde(rename = "Military-transport", alias = "Военно-транспортный")]
    MilitaryTransport,
}

/// All categories, in the order shown by the catalog filter
pub const CATEGORIES: [Category; 3] = [
    Category::MultiRole,
    Category::Interceptor,
    Category::MilitaryTransport,
];

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::MultiRole => "Multi-role",
            Category::Interceptor => "Interceptor",
            Category::MilitaryTransport => "Military-transport",
        }
    }

    /// Parse a filter select value. The empty value (and anything unknown) means "all".
    pub fn from_filter_value(s: &str) -> Option<Self> {
        CATEGORIES.into_iter().find(|c| c.as_str() == s)
    }
}

/// Aircraft product (matches the catalog and cart endpoints)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    /// Unit price; always numeric and non-negative on the wire
    #[serde(deserialize_with = "non_negative_price")]
    pub price: f64,
    pub img: String,
    pub category: Category,
}

fn non_negative_price<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    let price = f64::deserialize(deserializer)?;
    if price >= 0.0 {
        Ok(price)
    } else {
        Err(de::Error::custom(format!("price must be non-negative, got {}", price)))
    }
}

/// JSON array of items that skips malformed entries instead of failing whole.
///
/// Each rejected entry is logged at `warn`. A payload that is not an array at
/// all is still an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemList(pub Vec<Item>);

impl<'de> Deserialize<'de> for ItemList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<serde_json::Value>::deserialize(deserializer)?;
        let items = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value::<Item>(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::warn!("Skipping malformed item at index {}: {}", index, e);
                    None
                }
            })
            .collect();
        Ok(ItemList(items))
    }
}
