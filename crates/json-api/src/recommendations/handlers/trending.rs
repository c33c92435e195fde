//! Trending Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    recommendations::{errors::into_status_error, responses::RankedProductsResponse},
    state::State,
};

/// Trending Handler
///
/// Published products by popularity, purchases weighted double.
#[endpoint(tags("recommendations"), summary = "List Trending Products")]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<RankedProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .engagement
        .trending(limit.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
