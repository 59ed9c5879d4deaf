//! 服务启动器
//!
//! 给业务路由套上通用中间件并以优雅停机的方式运行

use std::future::Future;
use std::net::SocketAddr;

use axum::error_handling::HandleErrorLayer;
use axum::{BoxError, Router};
use tower::ServiceBuilder;
use tower::timeout::TimeoutLayer;
use tower::timeout::error::Elapsed;
use tower_http::trace::TraceLayer;
use tracing::info;
use warehouse_config::ServerConfig;
use warehouse_errors::AppError;

use crate::runtime::shutdown_signal;

/// 通用中间件：请求追踪 + 请求超时
///
/// 超时会丢弃处理中的 future，连带取消其中尚未完成的数据库调用，
/// 并按服务端错误返回 500 信封
pub fn with_default_layers(app: Router, config: &ServerConfig) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(handle_layer_error))
            .layer(TimeoutLayer::new(config.request_timeout)),
    )
    .layer(TraceLayer::new_for_http())
}

async fn handle_layer_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::internal("request timed out")
    } else {
        AppError::internal(format!("unhandled middleware error: {}", err))
    }
}

/// 运行 HTTP 服务，收到 Ctrl+C / SIGTERM 后停止
pub async fn serve(app: Router, config: &ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    serve_with_shutdown(app, config, shutdown_signal()).await
}

/// 运行 HTTP 服务，`signal` 完成后停止接收新请求并等待在途请求结束
pub async fn serve_with_shutdown<S>(
    app: Router,
    config: &ServerConfig,
    signal: S,
) -> Result<(), Box<dyn std::error::Error>>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = config.bind_address().parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server starting");

    axum::serve(listener, with_default_layers(app, config))
        .with_graceful_shutdown(signal)
        .await?;

    info!("HTTP server stopped");

    Ok(())
}
