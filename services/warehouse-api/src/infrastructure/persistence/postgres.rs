//! PostgreSQL repository implementation

use std::time::Instant;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::debug;
use warehouse_adapter_postgres::{PostgresConfig, create_pool};
use warehouse_errors::{AppError, AppResult};
use warehouse_telemetry::record_db_query;

use crate::domain::{BankAddressFilter, NewReceipt, Supplier, WarehouseRepository};

use super::predicate::count_suppliers_by_bank_address_query;
use super::rows::SupplierRow;

/// 仓库数据的 PostgreSQL 实现，独占连接池
///
/// 每个操作从池中借一个连接，结果集在返回前全部读完
#[derive(Clone)]
pub struct PostgresWarehouseRepository {
    pool: PgPool,
}

impl PostgresWarehouseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 建立连接池并探测连通性，成功后即可使用
    pub async fn connect(config: &PostgresConfig) -> AppResult<Self> {
        let pool = create_pool(config).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// 关闭连接池，等待借出的连接归还
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn observe<T>(operation: &str, table: &str, started: Instant, result: &Result<T, sqlx::Error>) {
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    record_db_query(operation, table, elapsed_ms, result.is_ok());
    debug!(operation, elapsed_ms, success = result.is_ok(), "Query finished");
}

#[async_trait]
impl WarehouseRepository for PostgresWarehouseRepository {
    async fn list_suppliers_by_material(&self, material_id: i64) -> AppResult<Vec<Supplier>> {
        let started = Instant::now();
        let result = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT s.supplier_id::BIGINT AS supplier_id, s.name, s.inn,
                   s.legal_zip_code, s.legal_city, s.legal_street_address,
                   s.bank_zip_code, s.bank_city, s.bank_street_address, s.bank_account
            FROM Suppliers s
            JOIN WarehouseReceipts wr ON s.supplier_id = wr.supplier_id
            WHERE wr.material_id = $1
            GROUP BY s.supplier_id
            ORDER BY s.supplier_id
            "#,
        )
        .bind(material_id)
        .fetch_all(&self.pool)
        .await;
        observe("list_suppliers_by_material", "suppliers", started, &result);

        let rows = result.map_err(|e| {
            AppError::database(format!(
                "Failed to list suppliers for material {}: {}",
                material_id, e
            ))
        })?;

        Ok(rows.into_iter().map(Supplier::from).collect())
    }

    async fn count_suppliers_by_material(&self, material_id: i64) -> AppResult<i64> {
        let started = Instant::now();
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT supplier_id)
            FROM WarehouseReceipts
            WHERE material_id = $1
            "#,
        )
        .bind(material_id)
        .fetch_one(&self.pool)
        .await;
        observe("count_suppliers_by_material", "warehouse_receipts", started, &result);

        result.map_err(|e| {
            AppError::database(format!(
                "Failed to count suppliers for material {}: {}",
                material_id, e
            ))
        })
    }

    async fn create_receipt(&self, receipt: &NewReceipt) -> AppResult<i64> {
        let started = Instant::now();
        let result = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO WarehouseReceipts (
                order_number, receipt_date, supplier_id, balance_account, doc_type_id,
                document_number, material_id, material_account, unit_id, quantity, unit_price
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING receipt_id::BIGINT
            "#,
        )
        .bind(&receipt.order_number)
        .bind(receipt.receipt_date)
        .bind(receipt.supplier_id)
        .bind(&receipt.balance_account)
        .bind(receipt.doc_type_id)
        .bind(&receipt.document_number)
        .bind(receipt.material_id)
        .bind(&receipt.material_account)
        .bind(receipt.unit_id)
        .bind(receipt.quantity)
        .bind(receipt.unit_price)
        .fetch_one(&self.pool)
        .await;
        observe("create_receipt", "warehouse_receipts", started, &result);

        result.map_err(|e| {
            AppError::database(format!(
                "Failed to insert receipt {} for supplier {}: {}",
                receipt.order_number, receipt.supplier_id, e
            ))
        })
    }

    async fn count_suppliers_by_bank_address(&self, filter: &BankAddressFilter) -> AppResult<i64> {
        let started = Instant::now();
        let mut builder = count_suppliers_by_bank_address_query(filter);
        let result = builder
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await;
        observe("count_suppliers_by_bank_address", "suppliers", started, &result);

        result.map_err(|e| {
            AppError::database(format!("Failed to count suppliers by bank address: {}", e))
        })
    }
}
