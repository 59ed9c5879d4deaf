//! warehouse-config - 配置加载库
//!
//! 启动时从环境变量构建一次 `AppConfig`，之后按引用传递给需要的组件

use std::str::FromStr;
use std::time::Duration;

use secrecy::Secret;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} must be set")]
    Missing(&'static str),

    #[error("environment variable {key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// 数据库连接的 SSL 模式，取值与 libpq 的 `sslmode` 一致
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SslMode {
    /// 禁用 SSL
    #[default]
    Disable,
    /// 允许 SSL（如果服务器支持）
    Prefer,
    /// 要求 SSL
    Require,
    /// 验证 CA 证书
    VerifyCa,
    /// 验证完整证书链
    VerifyFull,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
            SslMode::VerifyCa => "verify-ca",
            SslMode::VerifyFull => "verify-full",
        }
    }
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "disable" => Ok(SslMode::Disable),
            "prefer" => Ok(SslMode::Prefer),
            "require" => Ok(SslMode::Require),
            "verify-ca" => Ok(SslMode::VerifyCa),
            "verify-full" => Ok(SslMode::VerifyFull),
            other => Err(format!("unknown ssl mode: {}", other)),
        }
    }
}

/// 数据库配置
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Secret<String>,
    pub name: String,
    pub ssl_mode: SslMode,
    pub max_connections: u32,
}

/// 服务器配置
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub request_timeout: Duration,
}

impl ServerConfig {
    /// 监听地址，形如 `0.0.0.0:8080`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// 遥测配置
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// 应用配置
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub app_env: String,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// 从进程环境变量加载配置（先尝试加载 `.env`）
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 从任意键值来源加载配置
    ///
    /// 凭证（用户、密码、库名）没有默认值，缺失时立即失败
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let database = DatabaseConfig {
            host: get("DB_HOST").unwrap_or_else(|| "localhost".to_string()),
            port: parse_or(&get, "DB_PORT", 5432)?,
            user: required("DB_USER")?,
            password: Secret::new(required("DB_PASSWORD")?),
            name: required("DB_NAME")?,
            ssl_mode: parse_or(&get, "DB_SSL_MODE", SslMode::Disable)?,
            max_connections: parse_or(&get, "DB_MAX_CONNECTIONS", 10)?,
        };

        let server = ServerConfig {
            host: get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&get, "PORT", 8080)?,
            request_timeout: Duration::from_secs(parse_or(&get, "REQUEST_TIMEOUT_SECS", 30)?),
        };

        Ok(Self {
            app_name: get("APP_NAME").unwrap_or_else(|| "warehouse-api".to_string()),
            app_env: get("APP_ENV").unwrap_or_else(|| "development".to_string()),
            database,
            server,
            telemetry: TelemetryConfig {
                log_level: get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            },
        })
    }

    /// 是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app_env == "production"
    }
}

fn parse_or<T, G>(get: &G, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    G: Fn(&str) -> Option<String>,
{
    match get(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
