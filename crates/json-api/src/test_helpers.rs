//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use storefront_app::{
    context::AppContext,
    database::SqlError,
    domain::{
        engagement::MockEngagementService,
        inventory::MockInventoryService,
        products::{
            MockProductsService,
            models::{Product, ProductStatus, ProductUuid, Tags, Variant},
        },
    },
};

use crate::{state::State, viewer};

pub(crate) fn make_product(uuid: ProductUuid) -> Product {
    Product {
        uuid,
        name: "Linen Shirt".to_owned(),
        description: None,
        regular_price: 4_500,
        sale_price: None,
        image_url: None,
        images: Vec::new(),
        category: Some("shirts".to_owned()),
        product_type: None,
        gender: None,
        tags: Tags::new(),
        status: ProductStatus::Published,
        variants: vec![Variant {
            id: "M-white".to_owned(),
            size: "M".to_owned(),
            color: "white".to_owned(),
            stock: 3,
            image: None,
        }],
        view_count: 0,
        purchase_count: 0,
        sold_count: 0,
        viewed_by: Vec::new(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

/// Any storage failure; handlers only care that it is one.
pub(crate) fn sql_error() -> SqlError {
    SqlError::PoolTimedOut
}

pub(crate) fn strict_products_mock() -> MockProductsService {
    let mut products = MockProductsService::new();

    products.expect_list_products().never();
    products.expect_get_product().never();
    products.expect_create_product().never();
    products.expect_update_product().never();
    products.expect_delete_product().never();
    products.expect_available_colors().never();
    products.expect_new_arrivals().never();
    products.expect_best_sellers().never();

    products
}

pub(crate) fn strict_inventory_mock() -> MockInventoryService {
    let mut inventory = MockInventoryService::new();

    inventory.expect_check_availability().never();
    inventory.expect_apply_stock_change().never();
    inventory.expect_stock_summary().never();

    inventory
}

pub(crate) fn strict_engagement_mock() -> MockEngagementService {
    let mut engagement = MockEngagementService::new();

    engagement.expect_track_view().never();
    engagement.expect_recommend().never();
    engagement.expect_trending().never();
    engagement.expect_recommend_for_user().never();

    engagement
}

fn service(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn products_service(products: MockProductsService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(products),
            inventory: Arc::new(strict_inventory_mock()),
            engagement: Arc::new(strict_engagement_mock()),
        },
        route,
    )
}

pub(crate) fn inventory_service(inventory: MockInventoryService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            inventory: Arc::new(inventory),
            engagement: Arc::new(strict_engagement_mock()),
        },
        route,
    )
}

/// Engagement routes sit behind the viewer middleware, as in the app router.
pub(crate) fn engagement_service(engagement: MockEngagementService, route: Router) -> Service {
    service(
        AppContext {
            products: Arc::new(strict_products_mock()),
            inventory: Arc::new(strict_inventory_mock()),
            engagement: Arc::new(engagement),
        },
        Router::new().hoop(viewer::handler).push(route),
    )
}
