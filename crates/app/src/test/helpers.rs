//! Test Helpers

use jiff::Timestamp;

use crate::domain::products::{
    data::NewProduct,
    models::{Product, ProductStatus, ProductUuid, Tags, Variant},
};

pub(crate) fn new_product(name: &str, status: ProductStatus) -> NewProduct {
    NewProduct {
        uuid: ProductUuid::new(),
        name: name.to_owned(),
        description: None,
        regular_price: 1_000,
        sale_price: None,
        image_url: None,
        images: Vec::new(),
        category: None,
        product_type: None,
        gender: None,
        tags: Tags::new(),
        status,
        variants: Vec::new(),
    }
}

/// An in-memory aggregate with zeroed counters and an empty view log.
pub(crate) fn product_with_variants(status: ProductStatus, variants: Vec<Variant>) -> Product {
    Product {
        uuid: ProductUuid::new(),
        name: "Test product".to_owned(),
        description: None,
        regular_price: 1_000,
        sale_price: None,
        image_url: None,
        images: Vec::new(),
        category: None,
        product_type: None,
        gender: None,
        tags: Tags::new(),
        status,
        variants,
        view_count: 0,
        purchase_count: 0,
        sold_count: 0,
        viewed_by: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}
