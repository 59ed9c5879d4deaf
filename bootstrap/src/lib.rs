//! warehouse-bootstrap - 统一服务启动骨架
//!
//! 日志初始化、健康检查端点、HTTP 服务与优雅停机

mod health;
mod runtime;
mod starter;

pub use health::*;
pub use runtime::*;
pub use starter::*;
