//! 应用层

pub mod product;

use axum::{middleware, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use product::{handler::AppState, ProductService};

/// 组装路由与中间件
///
/// 请求日志在最外层，跨域预检与超时响应同样带有请求 ID。
pub fn build_app(product_service: ProductService, request_timeout: Duration) -> Router {
    product::handler::routes()
        .layer(
            ServiceBuilder::new()
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(AppState { product_service })
}
