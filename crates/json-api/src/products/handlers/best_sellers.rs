//! Best Sellers Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::{engagement::ranking::MAX_LIMIT, products::DEFAULT_BEST_SELLER_LIMIT};

use crate::{
    extensions::*,
    products::{ProductsResponse, errors::into_status_error},
    state::State,
};

/// Best Sellers Handler
///
/// Products ordered by units sold.
#[endpoint(
    tags("products"),
    summary = "List Best Sellers",
    responses(
        (status_code = StatusCode::OK, description = "Best sellers"),
        (status_code = StatusCode::BAD_REQUEST, description = "Limit out of range"),
    ),
)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let limit = limit.into_inner().unwrap_or(DEFAULT_BEST_SELLER_LIMIT);

    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(StatusError::bad_request().brief(format!("limit must be between 1 and {MAX_LIMIT}")));
    }

    let products = state
        .app
        .products
        .best_sellers(limit)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
