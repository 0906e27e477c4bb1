//! tandoor-core - cart, order and analytics logic for the digital menu
//!
//! The customer view builds a [`cart::Cart`], checkout turns it into an
//! immutable [`shared::order::Order`] appended to the [`ledger::OrderLedger`],
//! and the admin view reads pure [`analytics`] computations over the ledger.
//! State is persisted through the [`persist::StateStore`] collaborator after
//! every mutation; [`session::Session`] wires the pieces together for the
//! presentation layer.

pub mod analytics;
pub mod cart;
pub mod checkout;
pub mod config;
pub mod ledger;
pub mod money;
pub mod persist;
pub mod session;
pub mod utils;

pub use cart::Cart;
pub use checkout::{place_order, CheckoutError};
pub use config::AnalyticsConfig;
pub use ledger::OrderLedger;
pub use persist::{JsonFileStore, MemoryStore, StateStore, StoreError};
pub use session::Session;
