//! Inventory Ledger
//!
//! Stock arithmetic over a loaded product aggregate. Nothing here touches
//! storage: callers hold whatever lock makes the aggregate theirs and persist
//! the result.

use crate::domain::{
    inventory::{
        errors::InventoryError,
        models::{AvailabilityReason, StockCheck, StockDirection, StockStatus},
    },
    products::models::Product,
};

/// Report whether `requested` units of `variant_id` are in stock.
///
/// A missing variant is an answer, not an error.
#[must_use]
pub fn check_availability(product: &Product, variant_id: &str, requested: u64) -> StockCheck {
    let Some(variant) = product.variant(variant_id) else {
        return StockCheck {
            available: false,
            current_stock: 0,
            reason: AvailabilityReason::VariantNotFound,
        };
    };

    let available = variant.stock >= requested;

    StockCheck {
        available,
        current_stock: variant.stock,
        reason: if available {
            AvailabilityReason::InStock
        } else {
            AvailabilityReason::InsufficientStock
        },
    }
}

/// Move a variant's stock and return the new count.
///
/// # Errors
///
/// - [`InventoryError::VariantNotFound`] when no variant has that id.
/// - [`InventoryError::InsufficientStock`] when a decrease exceeds the stock;
///   the aggregate is left untouched.
/// - [`InventoryError::InvalidInput`] when an increase would overflow the
///   stored counter.
pub fn apply_stock_change(
    product: &mut Product,
    variant_id: &str,
    quantity: u64,
    direction: StockDirection,
) -> Result<u64, InventoryError> {
    let variant = product
        .variant_mut(variant_id)
        .ok_or_else(|| InventoryError::VariantNotFound(variant_id.to_owned()))?;

    let stock = match direction {
        StockDirection::Decrease => {
            variant
                .stock
                .checked_sub(quantity)
                .ok_or(InventoryError::InsufficientStock {
                    requested: quantity,
                    available: variant.stock,
                })?
        }
        StockDirection::Increase => variant
            .stock
            .checked_add(quantity)
            .filter(|stock| i64::try_from(*stock).is_ok())
            .ok_or_else(|| {
                InventoryError::InvalidInput(format!(
                    "increasing stock by {quantity} overflows variant {variant_id}"
                ))
            })?,
    };

    variant.stock = stock;

    Ok(stock)
}

/// Sum of stock across all variants.
#[must_use]
pub fn total_stock(product: &Product) -> u64 {
    product
        .variants
        .iter()
        .fold(0_u64, |total, variant| total.saturating_add(variant.stock))
}

/// `InStock` when any variant has stock; a product without variants is out.
#[must_use]
pub fn derive_stock_status(product: &Product) -> StockStatus {
    if total_stock(product) > 0 {
        StockStatus::InStock
    } else {
        StockStatus::OutOfStock
    }
}
