//! 数据库行映射结构

use sqlx::FromRow;

use crate::domain::Supplier;

/// 供应商数据库行
#[derive(Debug, FromRow)]
pub struct SupplierRow {
    pub supplier_id: i64,
    pub name: String,
    pub inn: Option<String>,
    pub legal_zip_code: Option<String>,
    pub legal_city: Option<String>,
    pub legal_street_address: Option<String>,
    pub bank_zip_code: Option<String>,
    pub bank_city: Option<String>,
    pub bank_street_address: Option<String>,
    pub bank_account: Option<String>,
}

impl From<SupplierRow> for Supplier {
    fn from(row: SupplierRow) -> Self {
        Self {
            supplier_id: row.supplier_id,
            name: row.name,
            inn: row.inn,
            legal_zip_code: row.legal_zip_code,
            legal_city: row.legal_city,
            legal_street_address: row.legal_street_address,
            bank_zip_code: row.bank_zip_code,
            bank_city: row.bank_city,
            bank_street_address: row.bank_street_address,
            bank_account: row.bank_account,
        }
    }
}
