//! Warehouse entities

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 供应商
///
/// `supplier_id` 由数据库分配；除名称外的字段在库中均可为空
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub supplier_id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legal_street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_zip_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account: Option<String>,
}

/// 新建入库单请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReceipt {
    pub order_number: String,
    pub receipt_date: NaiveDate,
    pub supplier_id: i64,
    pub balance_account: String,
    pub doc_type_id: i64,
    pub document_number: String,
    pub material_id: i64,
    pub material_account: String,
    pub unit_id: i64,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl NewReceipt {
    /// 用数据库分配的 ID 生成完整的入库单，其余字段原样回显
    pub fn into_receipt(self, receipt_id: i64) -> Receipt {
        Receipt {
            receipt_id,
            order_number: self.order_number,
            receipt_date: self.receipt_date,
            supplier_id: self.supplier_id,
            balance_account: self.balance_account,
            doc_type_id: self.doc_type_id,
            document_number: self.document_number,
            material_id: self.material_id,
            material_account: self.material_account,
            unit_id: self.unit_id,
            quantity: self.quantity,
            unit_price: self.unit_price,
        }
    }
}

/// 入库单（goods-in）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub receipt_id: i64,
    pub order_number: String,
    pub receipt_date: NaiveDate,
    pub supplier_id: i64,
    pub balance_account: String,
    pub doc_type_id: i64,
    pub document_number: String,
    pub material_id: i64,
    pub material_account: String,
    pub unit_id: i64,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}
