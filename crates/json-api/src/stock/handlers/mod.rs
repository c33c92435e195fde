//! Stock Handlers

pub(crate) mod check;
pub(crate) mod summary;
pub(crate) mod update;
