//! Menu Catalog Models
//!
//! Static reference data supplied at startup by the catalog collaborator.
//! The core treats these as read-only and never mutates them.

use serde::{Deserialize, Serialize};

/// Menu item entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MenuItem {
    /// Unique item identifier
    pub id: String,
    pub name: String,
    /// Display price text (e.g. "220" or "₹1,250"); parsed leniently
    /// when totalling, never assumed to be clean numeric input
    pub price: String,
    /// Category name this item belongs to
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_prompt: Option<String>,
}

/// Menu category - a named group of items
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub category_name: String,
    pub items: Vec<MenuItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Full menu payload from the catalog collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuData {
    pub restaurant_name: String,
    pub categories: Vec<MenuCategory>,
}

impl MenuData {
    /// Look up an item anywhere in the catalog by ID
    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|c| c.items.iter())
            .find(|i| i.id == item_id)
    }
}
