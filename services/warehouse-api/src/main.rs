//! warehouse-api Service

use std::sync::Arc;

use tracing::{error, info, warn};
use warehouse_adapter_postgres::PostgresConfig;
use warehouse_api::api::{AppState, router};
use warehouse_api::infrastructure::persistence::PostgresWarehouseRepository;
use warehouse_bootstrap::{HealthChecker, health_routes, init_runtime, serve};
use warehouse_config::{AppConfig, DatabaseConfig};
use warehouse_telemetry::init_metrics;

fn postgres_config(app_name: &str, db: &DatabaseConfig) -> PostgresConfig {
    PostgresConfig::from_components(&db.host, db.port, &db.name, &db.user)
        .with_password(db.password.clone())
        .with_ssl_mode(db.ssl_mode)
        .with_pool(1, db.max_connections)
        .with_application_name(app_name)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 加载配置（凭证缺失时直接退出）
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // 2. 初始化运行时
    init_runtime(&config);

    let metrics = match init_metrics() {
        Ok(handle) => Some(handle),
        Err(e) => {
            warn!(error = %e, "Prometheus recorder not installed, /metrics disabled");
            None
        }
    };

    // 3. 建立连接池
    let pg_config = postgres_config(&config.app_name, &config.database);
    let repository = match PostgresWarehouseRepository::connect(&pg_config).await {
        Ok(repository) => repository,
        Err(e) => {
            error!(error = %e, "Failed to connect to database");
            return Err(e.into());
        }
    };
    info!("Database connection established");

    // 4. 组装路由
    let app = router(AppState::new(Arc::new(repository.clone())))
        .merge(health_routes(HealthChecker::new(repository.pool().clone()), metrics));

    // 5. 运行直到收到停机信号
    let result = serve(app, &config.server).await;

    // 6. 清理
    repository.close().await;
    info!("Database pool closed");

    result
}
