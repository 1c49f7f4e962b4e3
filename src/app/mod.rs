//! 应用层：路由与中间件装配

pub mod products;

use axum::{middleware, routing::get, Router};
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::core::middleware::{
    auth_middleware, handle_panic, request_logging_middleware, BearerAuth,
};
use products::{handler, AppState, ProductService};

/// 构建完整的路由
///
/// `ServiceBuilder` 中靠前的层先处理请求：panic 兜底 → trace →
/// 请求日志 → 鉴权 → 路由处理器。
pub fn build_router(product_service: ProductService, auth: BearerAuth) -> Router {
    let state = AppState { product_service };

    Router::new()
        .route("/", get(handler::welcome))
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .fallback(handler::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(middleware::from_fn_with_state(auth, auth_middleware)),
        )
        .with_state(state)
}
