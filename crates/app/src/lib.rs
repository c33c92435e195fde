//! Storefront domain logic and persistence.
//!
//! Products are stored as aggregates (the product row, its variants and its view
//! log). Two components operate on them: the inventory ledger, which guards
//! per-variant stock, and the engagement engine, which counts views once per
//! viewer and ranks products for recommendations.

pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;
