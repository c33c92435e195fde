//! User Recommendations Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use crate::{
    extensions::*,
    recommendations::{errors::into_status_error, responses::RankedProductsResponse},
    state::State,
};

/// User Recommendations Handler
///
/// Requires a signed-in viewer.
#[endpoint(
    tags("recommendations"),
    summary = "Recommend Products For User",
    responses(
        (status_code = StatusCode::OK, description = "Recommendations"),
        (status_code = StatusCode::UNAUTHORIZED, description = "No signed-in user"),
    ),
)]
pub(crate) async fn handler(
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<RankedProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let user = depot
        .viewer_or_500()?
        .user
        .ok_or_else(|| StatusError::unauthorized().brief("Sign in to get recommendations"))?;

    let products = state
        .app
        .engagement
        .recommend_for_user(user, limit.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}
