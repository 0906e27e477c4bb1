//! Persistence collaborator - two independent JSON blobs
//!
//! The cart and the order ledger are saved as separate blobs after every
//! mutation. Loads are infallible by contract: a missing or corrupt blob
//! falls back to an empty default so startup never crashes on bad state.
//! Writes are last-writer-wins across instances; there is no locking.

use crate::cart::Cart;
use crate::ledger::OrderLedger;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Persistence errors (saves only - loads degrade to defaults)
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence collaborator for the two state blobs.
pub trait StateStore {
    /// Restore the cart; empty on missing/corrupt data.
    fn load_cart(&self) -> Cart;
    fn save_cart(&self, cart: &Cart) -> Result<(), StoreError>;

    /// Restore the ledger; empty on missing/corrupt data.
    fn load_orders(&self) -> OrderLedger;
    fn save_orders(&self, ledger: &OrderLedger) -> Result<(), StoreError>;
}

// ============================================================================
// JSON File Store
// ============================================================================

const CART_FILE: &str = "cart.json";
const ORDERS_FILE: &str = "orders.json";

/// File-backed store: `cart.json` and `orders.json` under a data directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn load_blob<T: DeserializeOwned + Default>(&self, file: &str) -> T {
        let path = self.dir.join(file);
        let Ok(raw) = fs::read_to_string(&path) else {
            // First run or deleted blob: start empty
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(path = %path.display(), %err, "corrupt state blob, starting empty");
                T::default()
            }
        }
    }

    fn save_blob<T: Serialize>(&self, file: &str, value: &T) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir)?;
        let raw = serde_json::to_string(value)?;
        fs::write(self.dir.join(file), raw)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load_cart(&self) -> Cart {
        self.load_blob(CART_FILE)
    }

    fn save_cart(&self, cart: &Cart) -> Result<(), StoreError> {
        self.save_blob(CART_FILE, cart)
    }

    fn load_orders(&self) -> OrderLedger {
        self.load_blob(ORDERS_FILE)
    }

    fn save_orders(&self, ledger: &OrderLedger) -> Result<(), StoreError> {
        self.save_blob(ORDERS_FILE, ledger)
    }
}

// ============================================================================
// In-Memory Store
// ============================================================================

/// In-memory store for tests and ephemeral sessions.
///
/// Holds the serialized blobs so round-trips exercise the same JSON path
/// as the file store. Single-threaded by the execution model, hence the
/// plain `RefCell`s.
#[derive(Debug, Default)]
pub struct MemoryStore {
    cart: RefCell<Option<String>>,
    orders: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cart blob with raw text (for corrupt-data tests).
    pub fn set_cart_blob(&self, raw: impl Into<String>) {
        *self.cart.borrow_mut() = Some(raw.into());
    }

    /// Seed the orders blob with raw text.
    pub fn set_orders_blob(&self, raw: impl Into<String>) {
        *self.orders.borrow_mut() = Some(raw.into());
    }
}

fn decode_blob<T: DeserializeOwned + Default>(blob: &Option<String>, what: &str) -> T {
    let Some(raw) = blob else {
        return T::default();
    };
    match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            warn!(what, %err, "corrupt state blob, starting empty");
            T::default()
        }
    }
}

impl StateStore for MemoryStore {
    fn load_cart(&self) -> Cart {
        decode_blob(&self.cart.borrow(), "cart")
    }

    fn save_cart(&self, cart: &Cart) -> Result<(), StoreError> {
        *self.cart.borrow_mut() = Some(serde_json::to_string(cart)?);
        Ok(())
    }

    fn load_orders(&self) -> OrderLedger {
        decode_blob(&self.orders.borrow(), "orders")
    }

    fn save_orders(&self, ledger: &OrderLedger) -> Result<(), StoreError> {
        *self.orders.borrow_mut() = Some(serde_json::to_string(ledger)?);
        Ok(())
    }
}
