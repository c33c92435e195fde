//! Recommendation Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::engagement::EngagementError;

pub(crate) fn into_status_error(error: EngagementError) -> StatusError {
    match error {
        EngagementError::NotFound => StatusError::not_found().brief("Product not found"),
        EngagementError::InvalidInput(reason) => StatusError::bad_request().brief(reason),
        EngagementError::Sql(source) => {
            error!("engagement storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
