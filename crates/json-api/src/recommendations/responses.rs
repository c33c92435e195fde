//! Recommendation Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use storefront_app::domain::engagement::ranking::RankedProduct;

use crate::products::ProductResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct TrackViewResponse {
    pub success: bool,

    /// `false` when this viewer had already been counted
    pub counted: bool,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RankedProductResponse {
    #[serde(flatten)]
    pub product: ProductResponse,

    /// Views plus weighted purchases
    pub popularity: u64,
}

impl From<RankedProduct> for RankedProductResponse {
    fn from(ranked: RankedProduct) -> Self {
        Self {
            product: ranked.product.into(),
            popularity: ranked.popularity,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct RankedProductsResponse {
    pub products: Vec<RankedProductResponse>,
}

impl From<Vec<RankedProduct>> for RankedProductsResponse {
    fn from(products: Vec<RankedProduct>) -> Self {
        Self {
            products: products.into_iter().map(Into::into).collect(),
        }
    }
}
