//! Stock Requests

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockCheckRequest {
    pub variant_id: String,
    pub quantity: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StockUpdateRequest {
    pub variant_id: String,
    pub quantity: u64,

    /// `increase` or `decrease`
    pub direction: String,
}
