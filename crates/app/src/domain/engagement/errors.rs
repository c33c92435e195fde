//! Engagement errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngagementError {
    #[error("product not found")]
    NotFound,

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for EngagementError {
    fn from(error: Error) -> Self {
        match error {
            Error::RowNotFound => Self::NotFound,
            error => Self::Sql(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_not_found() {
        let error = EngagementError::from(Error::RowNotFound);

        assert!(
            matches!(error, EngagementError::NotFound),
            "expected NotFound, got {error:?}"
        );
    }

    #[test]
    fn other_errors_map_to_sql() {
        let error = EngagementError::from(Error::PoolTimedOut);

        assert!(
            matches!(error, EngagementError::Sql(Error::PoolTimedOut)),
            "expected Sql, got {error:?}"
        );
    }
}
