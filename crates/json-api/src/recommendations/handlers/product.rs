//! Product Recommendations Handler

use std::sync::Arc;

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};
use uuid::Uuid;

use crate::{
    extensions::*,
    recommendations::{errors::into_status_error, responses::RankedProductsResponse},
    state::State,
};

/// Product Recommendations Handler
///
/// Published products sharing a category, type or tag with the given one.
#[endpoint(
    tags("recommendations"),
    summary = "Recommend Similar Products",
    responses(
        (status_code = StatusCode::OK, description = "Recommendations"),
        (status_code = StatusCode::BAD_REQUEST, description = "Limit out of range"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    limit: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<RankedProductsResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let products = state
        .app
        .engagement
        .recommend(product.into_inner().into(), limit.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        engagement::{EngagementError, MockEngagementService, ranking::RankedProduct},
        products::models::ProductUuid,
    };

    use crate::test_helpers::{engagement_service, make_product};

    use super::*;

    fn make_service(engagement: MockEngagementService) -> Service {
        engagement_service(
            engagement,
            Router::with_path("recommendations/product/{product}").get(handler),
        )
    }

    #[tokio::test]
    async fn test_recommendations_carry_popularity() -> TestResult {
        let source = ProductUuid::new();
        let similar = ProductUuid::new();

        let mut product = make_product(similar);

        product.view_count = 5;
        product.purchase_count = 2;

        let mut engagement = MockEngagementService::new();

        engagement
            .expect_recommend()
            .once()
            .withf(move |u, limit| *u == source && limit.is_none())
            .return_once(move |_, _| Ok(vec![RankedProduct::from(product)]));

        let response: RankedProductsResponse =
            TestClient::get(format!("http://example.com/recommendations/product/{source}"))
                .send(&make_service(engagement))
                .await
                .take_json()
                .await?;

        let first = response.products.first();

        assert_eq!(first.map(|p| p.product.uuid), Some(similar.into_uuid()));
        assert_eq!(first.map(|p| p.popularity), Some(9));

        Ok(())
    }

    #[tokio::test]
    async fn test_recommendations_forward_limit() -> TestResult {
        let mut engagement = MockEngagementService::new();

        engagement
            .expect_recommend()
            .once()
            .withf(|_, limit| *limit == Some(2))
            .return_once(|_, _| Ok(Vec::new()));

        let res = TestClient::get(format!(
            "http://example.com/recommendations/product/{}?limit=2",
            ProductUuid::new()
        ))
        .send(&make_service(engagement))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }

    #[tokio::test]
    async fn test_recommendations_invalid_limit_returns_400() -> TestResult {
        let mut engagement = MockEngagementService::new();

        engagement
            .expect_recommend()
            .once()
            .return_once(|_, _| Err(EngagementError::InvalidInput("limit must be between 1 and 100".to_owned())));

        let res = TestClient::get(format!(
            "http://example.com/recommendations/product/{}?limit=0",
            ProductUuid::new()
        ))
        .send(&make_service(engagement))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_recommendations_missing_source_returns_404() -> TestResult {
        let mut engagement = MockEngagementService::new();

        engagement
            .expect_recommend()
            .once()
            .return_once(|_, _| Err(EngagementError::NotFound));

        let res = TestClient::get(format!(
            "http://example.com/recommendations/product/{}",
            ProductUuid::new()
        ))
        .send(&make_service(engagement))
        .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
