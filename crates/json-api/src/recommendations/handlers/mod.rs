//! Recommendation Handlers

pub(crate) mod product;
pub(crate) mod trending;
pub(crate) mod user;
pub(crate) mod view;
