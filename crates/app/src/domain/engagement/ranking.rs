//! Ranking primitives shared by recommendations and trending.

use crate::domain::{engagement::errors::EngagementError, products::models::Product};

/// Result size when the caller passes none.
pub const DEFAULT_LIMIT: u32 = 4;

/// Largest result size a caller may ask for.
pub const MAX_LIMIT: u32 = 100;

/// A purchase is worth this many views.
pub const PURCHASE_WEIGHT: u64 = 2;

/// A product with the score it was ranked by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedProduct {
    pub product: Product,
    pub popularity: u64,
}

impl From<Product> for RankedProduct {
    fn from(product: Product) -> Self {
        let popularity = popularity(product.view_count, product.purchase_count);

        Self {
            product,
            popularity,
        }
    }
}

#[must_use]
pub fn popularity(view_count: u64, purchase_count: u64) -> u64 {
    PURCHASE_WEIGHT
        .saturating_mul(purchase_count)
        .saturating_add(view_count)
}

/// Apply the default and reject sizes outside `1..=MAX_LIMIT`.
///
/// # Errors
///
/// [`EngagementError::InvalidInput`] for `0` or anything above [`MAX_LIMIT`].
pub fn resolve_limit(limit: Option<u32>) -> Result<u32, EngagementError> {
    match limit {
        None => Ok(DEFAULT_LIMIT),
        Some(limit @ 1..=MAX_LIMIT) => Ok(limit),
        Some(limit) => Err(EngagementError::InvalidInput(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        ))),
    }
}
