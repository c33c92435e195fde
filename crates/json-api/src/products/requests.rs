//! Product Requests

use salvo::{oapi::ToSchema, prelude::StatusError};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::products::{
    data::{NewProduct, NewVariant, ProductUpdate},
    models::{ProductStatus, ProductUuid, Tags},
};

use crate::extensions::*;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantRequest {
    pub id: String,
    pub size: String,
    pub color: String,

    #[serde(default)]
    pub stock: u64,

    pub image: Option<String>,
}

impl From<VariantRequest> for NewVariant {
    fn from(request: VariantRequest) -> Self {
        NewVariant {
            id: request.id,
            size: request.size,
            color: request.color,
            stock: request.stock,
            image: request.image,
        }
    }
}

/// Create Product Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateProductRequest {
    /// Generated when omitted
    pub uuid: Option<Uuid>,

    pub name: String,
    pub description: Option<String>,

    /// Regular price in minor currency units
    pub regular_price: u64,

    pub sale_price: Option<u64>,
    pub image_url: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    pub category: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    pub gender: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    /// Defaults to `draft`
    pub status: Option<String>,

    #[serde(default)]
    pub variants: Vec<VariantRequest>,
}

impl CreateProductRequest {
    pub(crate) fn into_new_product(self) -> Result<NewProduct, StatusError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<ProductStatus>)
            .transpose()
            .or_400("invalid product status")?
            .unwrap_or_default();

        Ok(NewProduct {
            uuid: self.uuid.map_or_else(ProductUuid::new, ProductUuid::from_uuid),
            name: self.name,
            description: self.description,
            regular_price: self.regular_price,
            sale_price: self.sale_price,
            image_url: self.image_url,
            images: self.images,
            category: self.category,
            product_type: self.product_type,
            gender: self.gender,
            tags: Tags::from_vec(self.tags),
            status,
            variants: self.variants.into_iter().map(Into::into).collect(),
        })
    }
}

/// Update Product Request
///
/// Omitted fields keep their stored values.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProductRequest {
    pub name: Option<String>,
    pub description: Option<String>,

    /// Regular price in minor currency units
    pub regular_price: Option<u64>,

    pub sale_price: Option<u64>,
    pub image_url: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    pub gender: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<String>,
}

impl UpdateProductRequest {
    pub(crate) fn into_product_update(self) -> Result<ProductUpdate, StatusError> {
        let status = self
            .status
            .as_deref()
            .map(str::parse::<ProductStatus>)
            .transpose()
            .or_400("invalid product status")?;

        Ok(ProductUpdate {
            name: self.name,
            description: self.description,
            regular_price: self.regular_price,
            sale_price: self.sale_price,
            image_url: self.image_url,
            images: self.images,
            category: self.category,
            product_type: self.product_type,
            gender: self.gender,
            tags: self.tags.map(Tags::from_vec),
            status,
        })
    }
}
