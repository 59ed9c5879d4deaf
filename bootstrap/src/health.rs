//! 健康检查模块
//!
//! 提供 /health、/ready 和 /metrics 端点

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use sqlx::PgPool;
use tracing::warn;
use warehouse_adapter_postgres::check_connection;
use warehouse_telemetry::HealthStatus;

/// 健康检查器
#[derive(Clone)]
pub struct HealthChecker {
    pool: PgPool,
}

impl HealthChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 执行就绪检查（readiness）
    pub async fn readiness(&self) -> HealthStatus {
        let mut status = HealthStatus::new();
        match check_connection(&self.pool).await {
            Ok(()) => status.add_check("postgres", true, None),
            Err(e) => {
                warn!(error = %e, "Readiness check failed");
                status.add_check("postgres", false, Some("database unavailable".to_string()))
            }
        }
        status
    }
}

struct HealthState {
    checker: HealthChecker,
    metrics: Option<PrometheusHandle>,
}

/// 构建运维端点路由
pub fn health_routes(checker: HealthChecker, metrics: Option<PrometheusHandle>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .route("/metrics", get(render_metrics))
        .with_state(Arc::new(HealthState { checker, metrics }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn readiness_check(State(state): State<Arc<HealthState>>) -> Response {
    let status = state.checker.readiness().await;
    let code = if status.healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (code, Json(status)).into_response()
}

async fn render_metrics(State(state): State<Arc<HealthState>>) -> Response {
    match &state.metrics {
        Some(handle) => handle.render().into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
