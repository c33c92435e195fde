//! Engagement & Ranking
//!
//! Deduplicated view counting plus the similarity and popularity rankings
//! built on top of the counters.

pub mod errors;
pub mod identity;
pub mod images;
pub mod ranking;
mod repository;
pub mod service;
pub mod views;

pub use errors::EngagementError;
pub use service::*;
