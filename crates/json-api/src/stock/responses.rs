//! Stock Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::inventory::models::{StockCheck, StockSummary};

use crate::products::VariantResponse;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockSummaryResponse {
    pub product_uuid: Uuid,

    /// `in_stock` or `out_of_stock`
    pub stock_status: String,

    pub total_stock: u64,
    pub variants: Vec<VariantResponse>,
}

impl From<StockSummary> for StockSummaryResponse {
    fn from(summary: StockSummary) -> Self {
        Self {
            product_uuid: summary.product.into(),
            stock_status: summary.stock_status.as_str().to_owned(),
            total_stock: summary.total_stock,
            variants: summary.variants.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockCheckResponse {
    pub available: bool,
    pub current_stock: u64,
    pub reason: String,
}

impl From<StockCheck> for StockCheckResponse {
    fn from(check: StockCheck) -> Self {
        Self {
            available: check.available,
            current_stock: check.current_stock,
            reason: check.reason.to_string(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockUpdateResponse {
    pub success: bool,
    pub new_stock: u64,
}
