//! Stock Summary Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    state::State,
    stock::{errors::into_status_error, responses::StockSummaryResponse},
};

/// Stock Summary Handler
///
/// Per-variant stock and the derived stock status of one product.
#[endpoint(
    tags("stock"),
    summary = "Get Product Stock",
    responses(
        (status_code = StatusCode::OK, description = "Stock summary"),
        (status_code = StatusCode::NOT_FOUND, description = "Product not found"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<StockSummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .inventory
        .stock_summary(product.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        inventory::{
            InventoryError, MockInventoryService,
            models::{StockStatus, StockSummary},
        },
        products::models::{ProductUuid, Variant},
    };

    use crate::test_helpers::inventory_service;

    use super::*;

    fn make_service(inventory: MockInventoryService) -> Service {
        inventory_service(inventory, Router::with_path("products/{product}/stock").get(handler))
    }

    #[tokio::test]
    async fn test_summary_reports_variants_and_status() -> TestResult {
        let uuid = ProductUuid::new();

        let mut inventory = MockInventoryService::new();

        inventory
            .expect_stock_summary()
            .once()
            .withf(move |u| *u == uuid)
            .return_once(move |product| {
                Ok(StockSummary {
                    product,
                    stock_status: StockStatus::OutOfStock,
                    total_stock: 0,
                    variants: vec![Variant {
                        id: "S-black".to_owned(),
                        size: "S".to_owned(),
                        color: "black".to_owned(),
                        stock: 0,
                        image: None,
                    }],
                })
            });

        let response: StockSummaryResponse =
            TestClient::get(format!("http://example.com/products/{uuid}/stock"))
                .send(&make_service(inventory))
                .await
                .take_json()
                .await?;

        assert_eq!(response.product_uuid, uuid.into_uuid());
        assert_eq!(response.stock_status, "out_of_stock");
        assert_eq!(response.total_stock, 0);
        assert_eq!(response.variants.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_unknown_product_returns_404() -> TestResult {
        let mut inventory = MockInventoryService::new();

        inventory
            .expect_stock_summary()
            .once()
            .return_once(|_| Err(InventoryError::NotFound));

        let res = TestClient::get(format!("http://example.com/products/{}/stock", ProductUuid::new()))
            .send(&make_service(inventory))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
