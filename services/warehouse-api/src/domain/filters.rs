//! 查询过滤条件

use serde::Deserialize;

/// 按开户行地址统计供应商的过滤条件
///
/// 每个字段独立可选。`None` 表示不按该字段过滤，绝不等同于 `IS NULL`；
/// `Some("")` 是一个有效的等值条件。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct BankAddressFilter {
    pub bank_city: Option<String>,
    pub bank_street_address: Option<String>,
    pub bank_zip_code: Option<String>,
}

impl BankAddressFilter {
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.bank_city = Some(city.into());
        self
    }

    pub fn with_street_address(mut self, street: impl Into<String>) -> Self {
        self.bank_street_address = Some(street.into());
        self
    }

    pub fn with_zip_code(mut self, zip: impl Into<String>) -> Self {
        self.bank_zip_code = Some(zip.into());
        self
    }
}
