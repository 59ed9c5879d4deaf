//! 仓储接口

use async_trait::async_trait;
use warehouse_errors::AppResult;

use super::entities::{NewReceipt, Supplier};
use super::filters::BankAddressFilter;

/// 仓库数据访问接口
///
/// "没有匹配行" 不是错误：列表返回空，计数返回 0
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WarehouseRepository: Send + Sync {
    /// 查询供过某物料的供应商（按供应商去重）
    async fn list_suppliers_by_material(&self, material_id: i64) -> AppResult<Vec<Supplier>>;

    /// 统计供过某物料的不同供应商数量
    async fn count_suppliers_by_material(&self, material_id: i64) -> AppResult<i64>;

    /// 新建入库单，返回数据库分配的 receipt_id
    async fn create_receipt(&self, receipt: &NewReceipt) -> AppResult<i64>;

    /// 按开户行地址的任意字段组合统计供应商
    async fn count_suppliers_by_bank_address(&self, filter: &BankAddressFilter) -> AppResult<i64>;
}
