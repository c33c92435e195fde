//! Product Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use storefront_app::domain::products::ProductsServiceError;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::AlreadyExists => {
            StatusError::conflict().brief("Product already exists")
        }
        ProductsServiceError::InvalidReference | ProductsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Invalid product payload")
        }
        ProductsServiceError::InvalidData(reason) => {
            warn!("rejected product data: {reason}");

            StatusError::bad_request().brief(reason)
        }
        ProductsServiceError::InvalidPrice(source) => {
            warn!("rejected product price: {source}");

            StatusError::bad_request().brief("Price out of range")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Sql(source) => {
            error!("product storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
