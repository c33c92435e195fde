//! Track View Handler

use std::sync::Arc;

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    extensions::*,
    recommendations::{
        errors::into_status_error, requests::TrackViewRequest, responses::TrackViewResponse,
    },
    state::State,
};

/// Track View Handler
///
/// Counts the view once per signed-in user, or once per guest session and address.
#[endpoint(
    tags("recommendations"),
    summary = "Track Product View",
    responses(
        (status_code = StatusCode::OK, description = "View handled"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<TrackViewRequest>,
    depot: &mut Depot,
) -> Result<Json<TrackViewResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let identity = depot.viewer_or_500()?.clone();

    let outcome = state
        .app
        .engagement
        .track_view(json.into_inner().product_uuid.into(), identity)
        .await
        .map_err(into_status_error)?;

    Ok(Json(TrackViewResponse {
        success: true,
        counted: outcome.is_recorded(),
    }))
}
