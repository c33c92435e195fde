//! Stock Check Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    stock::{errors::into_status_error, requests::StockCheckRequest, responses::StockCheckResponse},
};

/// Stock Check Handler
///
/// A missing variant is an answer here, not an error.
#[endpoint(
    tags("stock"),
    summary = "Check Stock Availability",
    responses(
        (status_code = StatusCode::OK, description = "Availability"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<StockCheckRequest>,
    depot: &mut Depot,
) -> Result<Json<StockCheckResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let request = json.into_inner();

    let check = state
        .app
        .inventory
        .check_availability(
            product.into_inner().into(),
            &request.variant_id,
            request.quantity,
        )
        .await
        .map_err(into_status_error)?;

    Ok(Json(check.into()))
}
