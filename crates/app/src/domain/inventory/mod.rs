//! Inventory
//!
//! Per-variant stock tracking. [`ledger`] holds the arithmetic over an in-memory
//! product aggregate; the service wraps it in a row-locked transaction.

pub mod errors;
pub mod ledger;
pub mod models;
mod repository;
pub mod service;

pub use errors::InventoryError;
pub use service::*;
