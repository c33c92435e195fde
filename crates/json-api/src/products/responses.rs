//! Product Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    inventory::ledger::derive_stock_status,
    products::models::{ColorCount, Product, Variant, ViewRecord},
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct VariantResponse {
    /// Variant id, unique within the product
    pub id: String,
    pub size: String,
    pub color: String,
    pub stock: u64,
    pub image: Option<String>,
}

impl From<Variant> for VariantResponse {
    fn from(variant: Variant) -> Self {
        Self {
            id: variant.id,
            size: variant.size,
            color: variant.color,
            stock: variant.stock,
            image: variant.image,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductResponse {
    /// The unique identifier of the product
    pub uuid: Uuid,

    pub name: String,
    pub description: Option<String>,

    /// Regular price in minor currency units
    pub regular_price: u64,

    /// Sale price in minor currency units
    pub sale_price: Option<u64>,

    pub image_url: Option<String>,
    pub images: Vec<String>,
    pub category: Option<String>,

    #[serde(rename = "type")]
    pub product_type: Option<String>,

    pub gender: Option<String>,
    pub tags: Vec<String>,

    /// One of `draft`, `published`, `archived`, `scheduled`
    pub status: String,

    /// `in_stock` when any variant has stock, otherwise `out_of_stock`
    pub stock_status: String,

    pub variants: Vec<VariantResponse>,
    pub view_count: u64,
    pub purchase_count: u64,
    pub sold_count: u64,

    /// The date and time the product was created
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let stock_status = derive_stock_status(&product).as_str().to_owned();

        ProductResponse {
            uuid: product.uuid.into(),
            name: product.name,
            description: product.description,
            regular_price: product.regular_price,
            sale_price: product.sale_price,
            image_url: product.image_url,
            images: product.images,
            category: product.category,
            product_type: product.product_type,
            gender: product.gender,
            tags: product.tags.into_vec(),
            status: product.status.to_string(),
            stock_status,
            variants: product.variants.into_iter().map(Into::into).collect(),
            view_count: product.view_count,
            purchase_count: product.purchase_count,
            sold_count: product.sold_count,
            created_at: product.created_at.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ViewResponse {
    pub user_uuid: Option<Uuid>,
    pub session_id: Option<String>,
    pub ip_address: String,
    pub viewed_at: String,
}

impl From<ViewRecord> for ViewResponse {
    fn from(view: ViewRecord) -> Self {
        Self {
            user_uuid: view.user.map(Into::into),
            session_id: view.session_id,
            ip_address: view.ip_address,
            viewed_at: view.viewed_at.to_string(),
        }
    }
}

/// A single product together with its view log.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductDetailResponse {
    #[serde(flatten)]
    pub product: ProductResponse,

    pub viewed_by: Vec<ViewResponse>,
}

impl From<Product> for ProductDetailResponse {
    fn from(mut product: Product) -> Self {
        let viewed_by = std::mem::take(&mut product.viewed_by)
            .into_iter()
            .map(Into::into)
            .collect();

        Self {
            product: product.into(),
            viewed_by,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductsResponse {
    /// The list of products
    pub products: Vec<ProductResponse>,
}

impl From<Vec<Product>> for ProductsResponse {
    fn from(products: Vec<Product>) -> Self {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ColorResponse {
    pub color: String,

    /// Units in stock across every variant in this colour
    pub count: u64,
}

impl From<ColorCount> for ColorResponse {
    fn from(color: ColorCount) -> Self {
        Self {
            color: color.color,
            count: color.count,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ColorsResponse {
    pub colors: Vec<ColorResponse>,
}

impl From<Vec<ColorCount>> for ColorsResponse {
    fn from(colors: Vec<ColorCount>) -> Self {
        Self {
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }
}
