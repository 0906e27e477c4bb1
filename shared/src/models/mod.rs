//! Data models for the menu catalog

pub mod menu;

pub use menu::{MenuCategory, MenuData, MenuItem};
