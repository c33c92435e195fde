//! Update Product Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{ProductResponse, errors::into_status_error, requests::UpdateProductRequest},
    state::State,
};

/// Update Product Handler
///
/// Replaces the fields present in the body. Variants and stock are unchanged.
#[endpoint(
    tags("products"),
    summary = "Update Product",
    responses(
        (status_code = StatusCode::OK, description = "Product updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateProductRequest>,
    depot: &mut Depot,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let update = json.into_inner().into_product_update()?;

    let product = state
        .app
        .products
        .update_product(product.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}
