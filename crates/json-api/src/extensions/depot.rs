//! Depot helper extensions.

use std::any::Any;

use salvo::prelude::{Depot, StatusError};
use storefront_app::domain::engagement::identity::ViewerIdentity;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    fn insert_viewer(&mut self, identity: ViewerIdentity);

    /// The identity resolved by the viewer middleware.
    fn viewer_or_500(&self) -> Result<&ViewerIdentity, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }

    fn insert_viewer(&mut self, identity: ViewerIdentity) {
        self.inject(identity);
    }

    fn viewer_or_500(&self) -> Result<&ViewerIdentity, StatusError> {
        self.obtain_or_500::<ViewerIdentity>()
    }
}
