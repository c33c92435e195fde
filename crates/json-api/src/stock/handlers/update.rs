//! Stock Update Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use storefront_app::domain::inventory::models::StockDirection;

use crate::{
    extensions::*,
    state::State,
    stock::{
        errors::into_status_error, requests::StockUpdateRequest, responses::StockUpdateResponse,
    },
};

/// Stock Update Handler
///
/// Decreases never take a variant below zero; the whole change is refused instead.
#[endpoint(
    tags("stock"),
    summary = "Update Variant Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock updated"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::NOT_FOUND, description = "Product or variant not found"),
        (status_code = StatusCode::CONFLICT, description = "Insufficient stock"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<StockUpdateRequest>,
    depot: &mut Depot,
) -> Result<Json<StockUpdateResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let direction = request
        .direction
        .parse::<StockDirection>()
        .map_err(into_status_error)?;

    let new_stock = state
        .app
        .inventory
        .apply_stock_change(
            product.into_inner().into(),
            &request.variant_id,
            request.quantity,
            direction,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(StockUpdateResponse {
        success: true,
        new_stock,
    }))
}
