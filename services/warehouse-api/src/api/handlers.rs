//! 请求处理器
//!
//! 只做请求形状校验和错误到状态码的映射，业务数据全部来自仓储

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use warehouse_errors::{AppError, AppResult};

use crate::domain::{BankAddressFilter, NewReceipt, Receipt, Supplier};

use super::routes::AppState;

/// 计数响应
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountResponse {
    pub count: i64,
}

fn material_id(path: Result<Path<i64>, PathRejection>) -> AppResult<i64> {
    match path {
        Ok(Path(id)) if id > 0 => Ok(id),
        Ok(Path(id)) => Err(AppError::validation(format!(
            "material_id must be a positive integer, got {}",
            id
        ))),
        Err(rejection) => {
            debug!(error = %rejection, "Invalid material_id path segment");
            Err(AppError::validation("material_id must be a positive integer"))
        }
    }
}

/// GET /materials/{material_id}/suppliers
pub async fn list_suppliers_by_material(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<Vec<Supplier>>> {
    let material_id = material_id(path)?;
    let suppliers = state
        .repository
        .list_suppliers_by_material(material_id)
        .await?;
    Ok(Json(suppliers))
}

/// GET /materials/{material_id}/suppliers/count
pub async fn count_suppliers_by_material(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> AppResult<Json<CountResponse>> {
    let material_id = material_id(path)?;
    let count = state
        .repository
        .count_suppliers_by_material(material_id)
        .await?;
    Ok(Json(CountResponse { count }))
}

/// POST /receipts
pub async fn create_receipt(
    State(state): State<AppState>,
    payload: Result<Json<NewReceipt>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Receipt>)> {
    let Json(new_receipt) = payload.map_err(|rejection| {
        debug!(error = %rejection, "Malformed receipt payload");
        AppError::validation("invalid request body")
    })?;

    let receipt_id = state.repository.create_receipt(&new_receipt).await?;
    info!(
        receipt_id,
        supplier_id = new_receipt.supplier_id,
        material_id = new_receipt.material_id,
        "Receipt created"
    );

    Ok((StatusCode::CREATED, Json(new_receipt.into_receipt(receipt_id))))
}

/// GET /suppliers/count?bank_city=&bank_street_address=&bank_zip_code=
pub async fn count_suppliers_by_bank_address(
    State(state): State<AppState>,
    query: Result<Query<BankAddressFilter>, QueryRejection>,
) -> AppResult<Json<CountResponse>> {
    let Query(filter) = query.map_err(|rejection| {
        debug!(error = %rejection, "Malformed bank address filter");
        AppError::validation("invalid query parameters")
    })?;

    let count = state
        .repository
        .count_suppliers_by_bank_address(&filter)
        .await?;
    Ok(Json(CountResponse { count }))
}
