//! Get Product Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{ProductDetailResponse, errors::into_status_error},
    state::State,
};

/// Get Product Handler
///
/// Returns a product with its variants and view log.
#[endpoint(
    tags("products"),
    summary = "Get Product",
    responses(
        (status_code = StatusCode::OK, description = "Product found"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<ProductDetailResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .get_product(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        products::{
            MockProductsService, ProductsServiceError,
            models::{ProductUuid, ViewRecord},
        },
        users::UserUuid,
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products/{product}").get(handler))
    }

    #[tokio::test]
    async fn test_get_returns_product_with_views() -> TestResult {
        let uuid = ProductUuid::new();
        let user = UserUuid::new();

        let mut product = make_product(uuid);

        product.view_count = 1;
        product.viewed_by = vec![ViewRecord {
            user: Some(user),
            session_id: None,
            ip_address: "10.0.0.1".to_owned(),
            viewed_at: Timestamp::UNIX_EPOCH,
        }];

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |_| Ok(product));

        let response: ProductDetailResponse =
            TestClient::get(format!("http://example.com/products/{uuid}"))
                .send(&make_service(products))
                .await
                .take_json()
                .await?;

        assert_eq!(response.product.uuid, uuid.into_uuid());
        assert_eq!(response.product.stock_status, "in_stock");
        assert_eq!(response.product.view_count, 1);
        assert_eq!(response.viewed_by.len(), 1);
        assert_eq!(
            response.viewed_by.first().and_then(|view| view.user_uuid),
            Some(user.into_uuid())
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_get_missing_product_returns_404() -> TestResult {
        let uuid = ProductUuid::new();

        let mut products = MockProductsService::new();

        products
            .expect_get_product()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(|_| Err(ProductsServiceError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{uuid}"))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }

    #[tokio::test]
    async fn test_get_invalid_uuid_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_get_product().never();

        let res = TestClient::get("http://example.com/products/not-a-uuid")
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
