//! Order ledger - the session's history of submitted orders
//!
//! Orders are appended at the logical front (newest first). Individual
//! orders mutate only through their status; the collection shrinks only
//! via a full clear. Unknown order IDs are silent no-ops.

use serde::{Deserialize, Serialize};
use shared::order::{Order, OrderStatus};
use tracing::debug;

/// Order ledger
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the logical front (most-recent-first insertion order).
    pub fn append(&mut self, order: Order) {
        debug!(order_id = %order.id, "ledger: appending order");
        self.orders.insert(0, order);
    }

    /// Replace the status of the order with the given ID; silent no-op
    /// when the ID is unknown.
    pub fn update_status(&mut self, order_id: &str, status: OrderStatus) {
        match self.orders.iter_mut().find(|o| o.id == order_id) {
            Some(order) => {
                debug!(order_id, ?status, "ledger: status updated");
                order.status = status;
            }
            None => debug!(order_id, "ledger: status update for unknown order ignored"),
        }
    }

    /// Drop every order. Irreversible.
    pub fn clear(&mut self) {
        debug!(count = self.orders.len(), "ledger: clearing all orders");
        self.orders.clear();
    }

    /// Orders in canonical (insertion) order, newest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Display view: stable sort by timestamp descending, ties keeping
    /// insertion order. Does not touch the canonical order.
    pub fn sorted_by_time_desc(&self) -> Vec<Order> {
        let mut view = self.orders.clone();
        view.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        view
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
