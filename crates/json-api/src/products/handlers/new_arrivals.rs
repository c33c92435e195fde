//! New Arrivals Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use storefront_app::domain::products::DEFAULT_NEW_ARRIVAL_DAYS;

use crate::{
    extensions::*,
    products::{ProductsResponse, errors::into_status_error},
    state::State,
};

/// New Arrivals Handler
///
/// Products created within the last `days` days (default 14), newest first.
#[endpoint(tags("products"), summary = "List New Arrivals")]
pub(crate) async fn handler(
    days: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<ProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let days = days.into_inner().unwrap_or(DEFAULT_NEW_ARRIVAL_DAYS);

    let products = state
        .app
        .products
        .new_arrivals(days)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
