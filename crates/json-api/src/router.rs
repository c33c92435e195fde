//! App Router

use salvo::Router;

use crate::{products, recommendations, stock, viewer};

pub fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("products")
                .get(products::index::handler)
                .post(products::create::handler)
                .push(Router::with_path("colors").get(products::colors::handler))
                .push(Router::with_path("new-arrivals").get(products::new_arrivals::handler))
                .push(Router::with_path("best-sellers").get(products::best_sellers::handler))
                .push(
                    Router::with_path("{product}")
                        .get(products::get::handler)
                        .put(products::update::handler)
                        .delete(products::delete::handler)
                        .push(
                            Router::with_path("stock")
                                .get(stock::summary::handler)
                                .put(stock::update::handler)
                                .push(Router::with_path("check").post(stock::check::handler)),
                        ),
                ),
        )
        .push(
            Router::with_path("recommendations")
                .hoop(viewer::handler)
                .push(Router::with_path("view").post(recommendations::view::handler))
                .push(
                    Router::with_path("product/{product}").get(recommendations::product::handler),
                )
                .push(Router::with_path("user").get(recommendations::user::handler))
                .push(Router::with_path("trending").get(recommendations::trending::handler)),
        )
}
