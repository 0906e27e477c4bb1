//! Order types
//!
//! Cart entries, submitted orders and derived sales summaries.

pub mod types;

pub use types::{CartEntry, Order, OrderStatus, TableSalesSummary, GUEST_TABLE, UNKNOWN_TABLE};
