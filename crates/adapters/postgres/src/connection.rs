//! PostgreSQL 连接管理

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;
use warehouse_errors::{AppError, AppResult};

use crate::config::PostgresConfig;

/// 创建 PostgreSQL 连接池并做一次连通性探测
pub async fn create_pool(config: &PostgresConfig) -> AppResult<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.pool_max)
        .min_connections(config.pool_min)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(config.connect_options())
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))?;

    check_connection(&pool).await?;

    info!(
        host = %config.host,
        port = config.port,
        database = %config.database,
        max_connections = config.pool_max,
        "PostgreSQL pool ready"
    );

    Ok(pool)
}

/// 检查数据库连接
pub async fn check_connection(pool: &PgPool) -> AppResult<()> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
    Ok(())
}
