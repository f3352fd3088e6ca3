//! Item entity - collectible objects the player can own.

use serde::{Deserialize, Serialize};

use crate::ItemId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    Clothing,
    Accessory,
    Gift,
    Consumable,
}

/// A collectible object.
///
/// Simple data struct: any combination of values is valid, so the fields are
/// public.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    /// Shop value in money units.
    pub value: i64,
}

impl Item {
    pub fn new(name: impl Into<String>, item_type: ItemType, value: i64) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            description: String::new(),
            item_type,
            value,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Matches either the item's ID or, case-insensitively, its name.
    pub fn matches_key(&self, key: &str) -> bool {
        let key = key.trim();
        self.id.to_string() == key || self.name.eq_ignore_ascii_case(key)
    }
}
