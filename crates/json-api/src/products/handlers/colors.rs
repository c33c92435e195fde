//! Available Colors Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    products::{ColorsResponse, errors::into_status_error},
    state::State,
};

/// Available Colors Handler
///
/// Colours with stock on hand, summed across variants.
#[endpoint(tags("products"), summary = "List Available Colors")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ColorsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let colors = state
        .app
        .products
        .available_colors()
        .await
        .map_err(into_status_error)?;

    Ok(Json(colors.into()))
}
