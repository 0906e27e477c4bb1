//! Session state - cart + ledger + persistence wired together
//!
//! One `Session` per running instance. Every mutating operation follows
//! the same shape: mutate the in-memory state, then explicitly save the
//! affected blob through the store. Save failures are logged and absorbed
//! so a full disk never turns a cart tap into a crash; the in-memory state
//! stays authoritative for the rest of the session.

use crate::cart::Cart;
use crate::checkout::{self, CheckoutError};
use crate::ledger::OrderLedger;
use crate::persist::StateStore;
use shared::models::MenuItem;
use shared::order::{Order, OrderStatus};
use tracing::{error, info};

/// Session state for one running instance
pub struct Session {
    cart: Cart,
    ledger: OrderLedger,
    store: Box<dyn StateStore>,
}

impl Session {
    /// Open a session, restoring cart and ledger from the store.
    /// Missing or corrupt blobs restore as empty.
    pub fn open(store: Box<dyn StateStore>) -> Self {
        let cart = store.load_cart();
        let ledger = store.load_orders();
        info!(
            cart_items = cart.entries().len(),
            orders = ledger.len(),
            "session restored"
        );
        Self {
            cart,
            ledger,
            store,
        }
    }

    // ========================================================================
    // Read-only snapshots for the presentation layer
    // ========================================================================

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn orders(&self) -> &OrderLedger {
        &self.ledger
    }

    // ========================================================================
    // Cart actions
    // ========================================================================

    pub fn add_to_cart(&mut self, item: &MenuItem) {
        self.cart.add(item);
        self.persist_cart();
    }

    pub fn increase_qty(&mut self, item_id: &str) {
        self.cart.increase(item_id);
        self.persist_cart();
    }

    pub fn decrease_qty(&mut self, item_id: &str) {
        self.cart.decrease(item_id);
        self.persist_cart();
    }

    pub fn remove_item(&mut self, item_id: &str) {
        self.cart.remove(item_id);
        self.persist_cart();
    }

    pub fn clear_cart(&mut self) {
        self.cart.clear();
        self.persist_cart();
    }

    // ========================================================================
    // Order actions
    // ========================================================================

    /// Checkout: snapshot the cart into a new order, append it to the
    /// ledger and clear the cart. An empty cart is rejected before any
    /// state change or persistence write.
    pub fn place_order(&mut self, table: Option<String>) -> Result<Order, CheckoutError> {
        let order = checkout::place_order(&self.cart, table)?;
        self.ledger.append(order.clone());
        self.cart.clear();
        self.persist_orders();
        self.persist_cart();
        Ok(order)
    }

    /// Toggle an order's status; unknown IDs are silent no-ops.
    pub fn update_order_status(&mut self, order_id: &str, status: OrderStatus) {
        self.ledger.update_status(order_id, status);
        self.persist_orders();
    }

    pub fn clear_orders(&mut self) {
        self.ledger.clear();
        self.persist_orders();
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    fn persist_cart(&self) {
        if let Err(err) = self.store.save_cart(&self.cart) {
            error!(%err, "failed to persist cart");
        }
    }

    fn persist_orders(&self) {
        if let Err(err) = self.store.save_orders(&self.ledger) {
            error!(%err, "failed to persist orders");
        }
    }
}
