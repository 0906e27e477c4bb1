//! Shared types for the cart/order lifecycle

use crate::models::MenuItem;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sentinel table for orders placed without a scanned table link
pub const GUEST_TABLE: &str = "Guest";

/// Bucket used by analytics for orders with no table at all
/// (possible in persisted data from older sessions)
pub const UNKNOWN_TABLE: &str = "Unknown";

// ============================================================================
// Order Status
// ============================================================================

/// Order status
///
/// `New` and `Served` are mutually reachable: a served order can be
/// reopened by the waiter view. There is no terminal state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    New,
    Served,
}

// ============================================================================
// Cart Entry
// ============================================================================

/// Cart entry - a menu item plus a quantity
///
/// Invariant: `quantity >= 1`. An entry that would reach quantity 0 is
/// removed from the cart instead of being stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartEntry {
    /// Menu item ID
    pub id: String,
    /// Item name snapshot
    pub name: String,
    /// Display price text from the catalog
    pub price: String,
    /// Category name snapshot
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Quantity, always >= 1
    pub quantity: u32,
}

impl CartEntry {
    /// Snapshot a menu item into a fresh entry with quantity 1
    pub fn new(item: &MenuItem) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price.clone(),
            category: item.category.clone(),
            image_url: item.image_url.clone(),
            quantity: 1,
        }
    }
}

// ============================================================================
// Order
// ============================================================================

/// Order entity - an immutable record derived from the cart at checkout
///
/// Items and totals never change after creation; only `status` may be
/// toggled by the waiter view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    /// Order ID (generated at creation)
    pub id: String,
    /// Table identifier, `GUEST_TABLE` when no table link was scanned.
    /// `None` only occurs in persisted data written before the sentinel
    /// existed; analytics group it under `UNKNOWN_TABLE`.
    pub table: Option<String>,
    /// Item snapshots, independent of the live cart thereafter
    pub items: Vec<CartEntry>,
    /// Exact order total
    pub total: Decimal,
    /// Total formatted for display (Indian digit grouping)
    pub total_text: String,
    /// Creation instant (serialized as RFC 3339 / ISO 8601 UTC)
    pub created_at: DateTime<Utc>,
    pub status: OrderStatus,
}

// ============================================================================
// Derived Summaries
// ============================================================================

/// Per-table sales summary - derived from the ledger, never persisted
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TableSalesSummary {
    /// Table identifier (or `UNKNOWN_TABLE`)
    pub table: String,
    /// Number of orders placed on this table
    pub order_count: u32,
    /// Sum of order totals
    pub total_sales: Decimal,
}
