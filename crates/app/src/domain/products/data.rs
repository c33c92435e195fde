//! Products Data

use crate::domain::products::models::{ProductStatus, ProductUuid, Tags};

/// New Product Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub uuid: ProductUuid,
    pub name: String,
    pub description: Option<String>,
    pub regular_price: u64,
    pub sale_price: Option<u64>,
    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub gender: Option<String>,
    pub tags: Tags,
    pub status: ProductStatus,
    pub variants: Vec<NewVariant>,
}

/// New Variant Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewVariant {
    pub id: String,
    pub size: String,
    pub color: String,
    pub stock: u64,
    pub image: Option<String>,
}

/// Product Update Data
///
/// `None` leaves the stored value unchanged. Variants and counters are not
/// touched; stock moves through the inventory ledger.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub regular_price: Option<u64>,
    pub sale_price: Option<u64>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub product_type: Option<String>,
    pub gender: Option<String>,
    pub tags: Option<Tags>,
    pub status: Option<ProductStatus>,
}
