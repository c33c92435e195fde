//! Product Handlers

pub(crate) mod best_sellers;
pub(crate) mod colors;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod new_arrivals;
pub(crate) mod update;
