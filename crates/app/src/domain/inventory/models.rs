//! Inventory Models

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::domain::{
    inventory::errors::InventoryError,
    products::models::{ProductUuid, Variant},
};

/// Which way a stock change moves the count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockDirection {
    Increase,
    Decrease,
}

impl StockDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Increase => "increase",
            Self::Decrease => "decrease",
        }
    }
}

impl Display for StockDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for StockDirection {
    type Err = InventoryError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "increase" => Ok(Self::Increase),
            "decrease" => Ok(Self::Decrease),
            other => Err(InventoryError::InvalidInput(format!(
                "unknown stock direction: {other}"
            ))),
        }
    }
}

/// Why an availability check came out the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityReason {
    InStock,
    InsufficientStock,
    VariantNotFound,
}

impl Display for AvailabilityReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::InStock => "in stock",
            Self::InsufficientStock => "insufficient stock",
            Self::VariantNotFound => "variant not found",
        })
    }
}

/// Answer to "can `requested` units of this variant be taken?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockCheck {
    pub available: bool,
    pub current_stock: u64,
    pub reason: AvailabilityReason,
}

/// Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    InStock,
    OutOfStock,
}

impl StockStatus {
    /// Wire form, matching the serde representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InStock => "in_stock",
            Self::OutOfStock => "out_of_stock",
        }
    }
}

impl Display for StockStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(match self {
            Self::InStock => "in stock",
            Self::OutOfStock => "out of stock",
        })
    }
}

/// Stock view of a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockSummary {
    pub product: ProductUuid,
    pub stock_status: StockStatus,
    pub total_stock: u64,
    pub variants: Vec<Variant>,
}
