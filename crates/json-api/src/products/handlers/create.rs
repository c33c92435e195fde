//! Create Product Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    extensions::*,
    products::{errors::into_status_error, requests::CreateProductRequest},
    state::State,
};

/// Product Created Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProductCreatedResponse {
    /// Created product UUID
    pub uuid: Uuid,
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::CONFLICT, description = "Product already exists"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductCreatedResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = json.into_inner().into_new_product()?;

    let uuid = state
        .app
        .products
        .create_product(product)
        .await
        .map_err(into_status_error)?
        .uuid;

    res.add_header(LOCATION, format!("/products/{uuid}"), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ProductCreatedResponse { uuid: uuid.into() }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use storefront_app::domain::products::{
        MockProductsService, ProductsServiceError,
        models::{ProductStatus, ProductUuid},
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(products: MockProductsService) -> Service {
        products_service(products, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let uuid = ProductUuid::new();
        let product = make_product(uuid);

        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(move |new| {
                new.uuid == uuid
                    && new.name == "Linen Shirt"
                    && new.status == ProductStatus::Published
                    && new.product_type.as_deref() == Some("shirt")
                    && new.tags.first().map(String::as_str) == Some("summer")
                    && new.variants.len() == 1
            })
            .return_once(move |_| Ok(product));

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "uuid": uuid.into_uuid(),
                "name": "Linen Shirt",
                "regular_price": 4500,
                "type": "shirt",
                "tags": ["summer"],
                "status": "published",
                "variants": [{ "id": "M-white", "size": "M", "color": "white", "stock": 3 }]
            }))
            .send(&make_service(products))
            .await;

        let body: ProductCreatedResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/products/{uuid}").as_str()));
        assert_eq!(body.uuid, uuid.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_defaults_to_draft() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .withf(|new| new.status == ProductStatus::Draft && new.variants.is_empty())
            .return_once(|new| Ok(make_product(new.uuid)));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Hat", "regular_price": 900 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_conflict_returns_409() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::AlreadyExists));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Hat", "regular_price": 900 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CONFLICT));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_duplicate_variants_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products
            .expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::InvalidData("duplicate variant id: A".to_owned())));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Hat", "regular_price": 900 }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_unknown_status_returns_400() -> TestResult {
        let mut products = MockProductsService::new();

        products.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Hat", "regular_price": 900, "status": "live" }))
            .send(&make_service(products))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
