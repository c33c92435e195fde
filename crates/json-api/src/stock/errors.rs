//! Stock Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::inventory::InventoryError;

pub(crate) fn into_status_error(error: InventoryError) -> StatusError {
    match error {
        InventoryError::NotFound => StatusError::not_found().brief("Product not found"),
        InventoryError::VariantNotFound(variant) => {
            StatusError::not_found().brief(format!("Variant not found: {variant}"))
        }
        InventoryError::InsufficientStock {
            requested,
            available,
        } => StatusError::conflict().brief(format!(
            "Insufficient stock: requested {requested}, available {available}"
        )),
        InventoryError::InvalidInput(reason) => StatusError::bad_request().brief(reason),
        InventoryError::Sql(source) => {
            error!("inventory storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
