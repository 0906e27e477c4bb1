//! Checkout - turns a non-empty cart into an immutable order
//!
//! The order snapshots the cart's entries by value; later cart mutations
//! never touch a placed order.

use crate::cart::Cart;
use crate::money;
use chrono::Utc;
use shared::order::{Order, OrderStatus, GUEST_TABLE};
use shared::util::order_id;
use thiserror::Error;
use tracing::info;

/// Checkout errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    /// Empty-cart checkout is rejected before any state change
    #[error("cannot place an order from an empty cart")]
    EmptyCart,
}

/// Build an order from the current cart contents.
///
/// `table` comes from the scanned table link; `None` falls back to the
/// guest sentinel. The cart itself is not modified here - the caller
/// clears it once the order has been appended and persisted.
pub fn place_order(cart: &Cart, table: Option<String>) -> Result<Order, CheckoutError> {
    if cart.total_count() == 0 {
        return Err(CheckoutError::EmptyCart);
    }

    let total = cart.total_price();
    let order = Order {
        id: order_id(),
        table: Some(table.unwrap_or_else(|| GUEST_TABLE.to_string())),
        items: cart.entries().to_vec(),
        total,
        total_text: money::format_grouped(total),
        created_at: Utc::now(),
        status: OrderStatus::New,
    };
    info!(order_id = %order.id, table = ?order.table, total = %order.total_text, "order placed");
    Ok(order)
}
