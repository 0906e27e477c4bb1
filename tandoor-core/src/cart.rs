//! Cart store - the customer's in-progress selection
//!
//! Entries are keyed by menu item ID and kept in insertion order. The
//! store upholds one invariant: no entry ever exists with quantity 0 -
//! decreasing past 1 removes the entry. Operations on unknown IDs are
//! silent no-ops, never errors.

use crate::money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::models::MenuItem;
use shared::order::CartEntry;
use tracing::debug;

/// Cart store
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one of `item`: increments the existing entry, or inserts a
    /// fresh entry with quantity 1. Always succeeds.
    pub fn add(&mut self, item: &MenuItem) {
        debug!(item = %item.name, "cart: adding item");
        match self.entries.iter_mut().find(|e| e.id == item.id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(CartEntry::new(item)),
        }
    }

    /// Increment quantity by 1; no-op if the ID is not in the cart.
    pub fn increase(&mut self, item_id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == item_id) {
            debug!(item = %entry.name, "cart: increasing quantity");
            entry.quantity += 1;
        }
    }

    /// Decrement quantity by 1, removing the entry when it would reach 0.
    /// No-op if the ID is not in the cart.
    pub fn decrease(&mut self, item_id: &str) {
        let Some(pos) = self.entries.iter().position(|e| e.id == item_id) else {
            return;
        };
        let entry = &mut self.entries[pos];
        if entry.quantity <= 1 {
            debug!(item = %entry.name, "cart: removing item as quantity reached 0");
            self.entries.remove(pos);
        } else {
            debug!(item = %entry.name, "cart: decreasing quantity");
            entry.quantity -= 1;
        }
    }

    /// Delete the entry regardless of quantity; no-op if absent.
    pub fn remove(&mut self, item_id: &str) {
        debug!(item_id, "cart: removing item");
        self.entries.retain(|e| e.id != item_id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        debug!("cart: clearing all items");
        self.entries.clear();
    }

    /// Total number of units across all entries.
    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    /// Exact total price: Σ quantity × leniently-parsed price.
    pub fn total_price(&self) -> Decimal {
        self.entries
            .iter()
            .map(|e| money::parse_price(&e.price) * Decimal::from(e.quantity))
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    /// Look up a single entry by item ID.
    pub fn get(&self, item_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|e| e.id == item_id)
    }
}
