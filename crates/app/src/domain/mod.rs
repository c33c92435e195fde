//! Storefront Domain Concerns

pub mod engagement;
pub mod inventory;
pub mod products;
pub mod users;
