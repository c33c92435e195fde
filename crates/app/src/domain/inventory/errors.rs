//! Inventory errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("product not found")]
    NotFound,

    #[error("variant not found: {0}")]
    VariantNotFound(String),

    #[error("insufficient stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u64, available: u64 },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for InventoryError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::CheckViolation) => {
                Self::InvalidInput("stock would violate a storage constraint".to_owned())
            }
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
