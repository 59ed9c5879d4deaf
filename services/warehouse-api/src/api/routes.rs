//! API 路由

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use warehouse_errors::AppError;

use crate::domain::WarehouseRepository;

use super::handlers;

/// 请求之间共享的状态，只有仓储（及其连接池）
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn WarehouseRepository>,
}

impl AppState {
    pub fn new(repository: Arc<dyn WarehouseRepository>) -> Self {
        Self { repository }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/materials/{material_id}/suppliers",
            get(handlers::list_suppliers_by_material),
        )
        .route(
            "/materials/{material_id}/suppliers/count",
            get(handlers::count_suppliers_by_material),
        )
        .route("/receipts", post(handlers::create_receipt))
        .route("/suppliers/count", get(handlers::count_suppliers_by_bank_address))
        .fallback(|| async { AppError::not_found("route not found") })
        .method_not_allowed_fallback(|| async {
            AppError::method_not_allowed("method not allowed")
        })
        .with_state(state)
}
