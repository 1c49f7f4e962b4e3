//! 产品处理器
//!
//! 只负责把路由映射到 `ProductService` 的操作并组装响应，不直接访问存储。

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
};

use super::{
    model::{ListQuery, NewProduct, Product, ProductPatch},
    service::ProductService,
};
use crate::core::{error::CoreError, extract::JsonBody, response::MessageBody};

pub const WELCOME_MESSAGE: &str =
    "Welcome to the Product API! Go to /api/products to see all products.";

#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

pub async fn welcome() -> &'static str {
    WELCOME_MESSAGE
}

/// 查询参数按原始键值对接收，重复或多余的参数都不会导致请求被拒绝
pub async fn list_products(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let query = ListQuery::from_pairs(pairs);
    let products = state.product_service.list_products(&query)?;
    Ok(Json(products))
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.get_product(&id)?;
    Ok(Json(product))
}

pub async fn create_product(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewProduct>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.product_service.create_product(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<ProductPatch>,
) -> Result<Json<Product>, CoreError> {
    let product = state.product_service.update_product(&id, patch)?;
    Ok(Json(product))
}

pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, CoreError> {
    state.product_service.delete_product(&id)?;
    Ok(Json(MessageBody::new("Product deleted successfully")))
}

pub async fn route_not_found() -> CoreError {
    CoreError::NotFound("Route not found".to_string())
}
