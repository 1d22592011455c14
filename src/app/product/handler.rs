//! 商品处理器

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get},
    Router,
};
use serde_json::Value;
use tracing::warn;

use super::{
    model::{NewProduct, Product, ProductListing},
    service::ProductService,
};
use crate::core::error::CoreError;

pub const WELCOME_MESSAGE: &str = "Welcome to the Product API";
pub const ALL_DELETED_MESSAGE: &str = "All products have been deleted";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(welcome))
        .route(
            "/products",
            get(list_products)
                .post(create_product)
                .delete(delete_all_products),
        )
        .route("/products/:id", delete(delete_product))
}

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

pub async fn list_products(State(state): State<AppState>) -> Json<ProductListing> {
    Json(state.product_service.list_products().into())
}

/// 非 JSON 请求或非对象载荷按空请求处理，由校验给出"全部必填"提示
pub async fn create_product(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let candidate = match payload {
        Ok(Json(payload)) => NewProduct::from_json(payload),
        Err(JsonRejection::MissingJsonContentType(_)) => NewProduct::default(),
        Err(rejection) => {
            warn!("请求体解析失败: {}", rejection.body_text());
            return Err(CoreError::BadRequest(rejection.body_text()));
        }
    };

    let product = state.product_service.create_product(&candidate)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, CoreError> {
    state.product_service.delete_product(&id)?;
    Ok(format!("Product with ID {} deleted", id))
}

pub async fn delete_all_products(State(state): State<AppState>) -> &'static str {
    state.product_service.delete_all_products();
    ALL_DELETED_MESSAGE
}
