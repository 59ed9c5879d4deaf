//! 动态 WHERE 条件组装
//!
//! 条件以 `(列名, 值)` 对的有序列表保存，渲染时在同一遍里写出 SQL 片段并绑定参数，
//! 第 N 个条件永远对应 `$N`。列名只能是编译期常量，用户输入只会作为绑定参数出现。

use sqlx::{Postgres, QueryBuilder};

use crate::domain::BankAddressFilter;

pub const COUNT_SUPPLIERS_BASE: &str = "SELECT COUNT(*) FROM Suppliers WHERE 1=1";

/// 等值条件集合
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EqualityPredicates<'a> {
    terms: Vec<(&'static str, &'a str)>,
}

impl<'a> EqualityPredicates<'a> {
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// 值存在时追加 `column = value`，不存在时什么也不做
    pub fn and_eq(mut self, column: &'static str, value: Option<&'a str>) -> Self {
        if let Some(value) = value {
            self.terms.push((column, value));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// 按追加顺序返回列名
    pub fn columns(&self) -> Vec<&'static str> {
        self.terms.iter().map(|(column, _)| *column).collect()
    }

    /// 按追加顺序返回绑定值
    pub fn values(&self) -> Vec<&'a str> {
        self.terms.iter().map(|(_, value)| *value).collect()
    }

    /// 把条件追加到已有 `WHERE` 子句之后
    pub fn push_onto(&self, builder: &mut QueryBuilder<'a, Postgres>) {
        for (column, value) in &self.terms {
            builder
                .push(" AND ")
                .push(*column)
                .push(" = ")
                .push_bind(*value);
        }
    }
}

impl<'a> From<&'a BankAddressFilter> for EqualityPredicates<'a> {
    /// 固定顺序：城市、街道地址、邮编
    fn from(filter: &'a BankAddressFilter) -> Self {
        EqualityPredicates::new()
            .and_eq("bank_city", filter.bank_city.as_deref())
            .and_eq("bank_street_address", filter.bank_street_address.as_deref())
            .and_eq("bank_zip_code", filter.bank_zip_code.as_deref())
    }
}

/// 构建按开户行地址统计供应商的查询
pub fn count_suppliers_by_bank_address_query(
    filter: &BankAddressFilter,
) -> QueryBuilder<'_, Postgres> {
    let mut builder = QueryBuilder::new(COUNT_SUPPLIERS_BASE);
    EqualityPredicates::from(filter).push_onto(&mut builder);
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 三个字段的全部 8 种组合
    fn all_filters() -> Vec<BankAddressFilter> {
        let mut filters = Vec::new();
        for mask in 0u8..8 {
            let mut filter = BankAddressFilter::default();
            if mask & 0b001 != 0 {
                filter = filter.with_city("Lyon");
            }
            if mask & 0b010 != 0 {
                filter = filter.with_street_address("Rue X");
            }
            if mask & 0b100 != 0 {
                filter = filter.with_zip_code("69001");
            }
            filters.push(filter);
        }
        filters
    }

    #[test]
    fn test_empty_filter_counts_everything() {
        let filter = BankAddressFilter::default();
        let builder = count_suppliers_by_bank_address_query(&filter);

        assert_eq!(builder.sql(), COUNT_SUPPLIERS_BASE);
        assert!(EqualityPredicates::from(&filter).is_empty());
    }

    #[test]
    fn test_all_fields_in_fixed_order() {
        let filter = BankAddressFilter::default()
            .with_zip_code("69001")
            .with_street_address("Rue X")
            .with_city("Lyon");
        let builder = count_suppliers_by_bank_address_query(&filter);

        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM Suppliers WHERE 1=1 \
             AND bank_city = $1 AND bank_street_address = $2 AND bank_zip_code = $3"
        );
        assert_eq!(
            EqualityPredicates::from(&filter).values(),
            vec!["Lyon", "Rue X", "69001"]
        );
    }

    #[test]
    fn test_gap_in_fields_keeps_placeholders_contiguous() {
        let filter = BankAddressFilter::default()
            .with_city("Lyon")
            .with_zip_code("69001");
        let builder = count_suppliers_by_bank_address_query(&filter);

        assert_eq!(
            builder.sql(),
            "SELECT COUNT(*) FROM Suppliers WHERE 1=1 AND bank_city = $1 AND bank_zip_code = $2"
        );
        assert_eq!(EqualityPredicates::from(&filter).values(), vec!["Lyon", "69001"]);
    }

    #[test]
    fn test_one_condition_per_present_field() {
        for filter in all_filters() {
            let predicates = EqualityPredicates::from(&filter);
            let present = [
                filter.bank_city.is_some(),
                filter.bank_street_address.is_some(),
                filter.bank_zip_code.is_some(),
            ]
            .iter()
            .filter(|p| **p)
            .count();

            assert_eq!(predicates.len(), present, "filter: {:?}", filter);

            let builder = count_suppliers_by_bank_address_query(&filter);
            let sql = builder.sql();
            assert_eq!(sql.matches(" AND ").count(), present, "sql: {}", sql);
            assert!(!sql.contains("IS NULL"));

            for (idx, column) in predicates.columns().iter().enumerate() {
                let clause = format!("{} = ${}", column, idx + 1);
                assert!(sql.contains(&clause), "missing `{}` in `{}`", clause, sql);
            }
            assert!(!sql.contains(&format!("${}", present + 1)));
        }
    }

    #[test]
    fn test_metacharacters_never_reach_sql_text() {
        for value in ["O'Brien", "100%", "x; DROP TABLE Suppliers; --", "' OR '1'='1"] {
            let filter = BankAddressFilter::default()
                .with_city(value)
                .with_street_address(value);
            let builder = count_suppliers_by_bank_address_query(&filter);

            assert_eq!(
                builder.sql(),
                "SELECT COUNT(*) FROM Suppliers WHERE 1=1 AND bank_city = $1 AND bank_street_address = $2"
            );
            assert_eq!(EqualityPredicates::from(&filter).values(), vec![value, value]);
        }
    }

    #[test]
    fn test_empty_string_is_a_present_value() {
        let filter = BankAddressFilter::default().with_street_address("");
        let predicates = EqualityPredicates::from(&filter);

        assert_eq!(predicates.columns(), vec!["bank_street_address"]);
        assert_eq!(predicates.values(), vec![""]);
    }
}
