//! Shared types for the tandoor workspace
//!
//! Model types used across crates: the menu catalog supplied by the
//! reference-data collaborator, cart/order records, and derived summaries.

pub mod models;
pub mod order;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
