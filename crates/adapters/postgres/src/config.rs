//! PostgreSQL 配置模块
//!
//! 连接参数与连接池设置

use std::time::Duration;

use secrecy::{ExposeSecret, Secret};
use sqlx::postgres::{PgConnectOptions, PgSslMode};

pub use warehouse_config::SslMode;

fn pg_ssl_mode(mode: SslMode) -> PgSslMode {
    match mode {
        SslMode::Disable => PgSslMode::Disable,
        SslMode::Prefer => PgSslMode::Prefer,
        SslMode::Require => PgSslMode::Require,
        SslMode::VerifyCa => PgSslMode::VerifyCa,
        SslMode::VerifyFull => PgSslMode::VerifyFull,
    }
}

/// PostgreSQL 配置
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: Option<Secret<String>>,
    pub ssl_mode: SslMode,

    /// 最小连接数
    pub pool_min: u32,
    /// 最大连接数
    pub pool_max: u32,
    /// 获取连接超时
    pub acquire_timeout: Duration,
    /// 空闲超时
    pub idle_timeout: Duration,
    /// 连接最大生命周期
    pub max_lifetime: Option<Duration>,
    /// 应用名称（用于连接标识）
    pub application_name: Option<String>,
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 5432,
            database: "postgres".to_string(),
            username: "postgres".to_string(),
            password: None,
            ssl_mode: SslMode::default(),
            pool_min: 1,
            pool_max: 10,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Duration::from_secs(600),
            max_lifetime: Some(Duration::from_secs(1800)),
            application_name: None,
        }
    }
}

impl PostgresConfig {
    /// 从组件创建配置
    pub fn from_components(
        host: impl Into<String>,
        port: u16,
        database: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port,
            database: database.into(),
            username: username.into(),
            ..Default::default()
        }
    }

    /// 设置密码
    pub fn with_password(mut self, password: Secret<String>) -> Self {
        self.password = Some(password);
        self
    }

    /// 设置 SSL 模式
    pub fn with_ssl_mode(mut self, mode: SslMode) -> Self {
        self.ssl_mode = mode;
        self
    }

    /// 设置连接池配置
    pub fn with_pool(mut self, min: u32, max: u32) -> Self {
        self.pool_min = min.min(max);
        self.pool_max = max;
        self
    }

    /// 设置应用名称
    pub fn with_application_name(mut self, name: impl Into<String>) -> Self {
        self.application_name = Some(name.into());
        self
    }

    /// 构建 sqlx 连接参数
    ///
    /// 密码直接交给驱动，不拼进 URL，因此特殊字符无需转义
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.database)
            .username(&self.username)
            .ssl_mode(pg_ssl_mode(self.ssl_mode));

        if let Some(ref password) = self.password {
            options = options.password(password.expose_secret());
        }
        if let Some(ref app_name) = self.application_name {
            options = options.application_name(app_name);
        }

        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PostgresConfig::default();
        assert_eq!(config.pool_min, 1);
        assert_eq!(config.pool_max, 10);
        assert_eq!(config.ssl_mode, SslMode::Disable);
        assert_eq!(config.port, 5432);
    }

    #[test]
    fn test_config_from_components() {
        let config = PostgresConfig::from_components("db.example.com", 5433, "warehouse_db", "admin")
            .with_password(Secret::new("p@ss:w/rd".to_string()))
            .with_pool(2, 20)
            .with_application_name("warehouse-api");

        assert_eq!(config.host, "db.example.com");
        assert_eq!(config.port, 5433);
        assert_eq!(config.database, "warehouse_db");
        assert_eq!(config.username, "admin");
        assert_eq!(config.pool_min, 2);
        assert_eq!(config.pool_max, 20);
        assert_eq!(config.application_name, Some("warehouse-api".to_string()));
    }

    #[test]
    fn test_pool_min_never_exceeds_max() {
        let config = PostgresConfig::default().with_pool(8, 4);
        assert_eq!(config.pool_min, 4);
        assert_eq!(config.pool_max, 4);
    }

    #[test]
    fn test_connect_options() {
        let config = PostgresConfig::from_components("db.internal", 6543, "warehouse_db", "warehouse_user")
            .with_ssl_mode(SslMode::Require)
            .with_application_name("warehouse-api");

        let options = config.connect_options();
        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "warehouse_user");
        assert_eq!(options.get_database(), Some("warehouse_db"));
        assert_eq!(options.get_application_name(), Some("warehouse-api"));
        assert!(matches!(options.get_ssl_mode(), PgSslMode::Require));
    }

    #[test]
    fn test_debug_redacts_password() {
        let config = PostgresConfig::default().with_password(Secret::new("hunter2".to_string()));
        assert!(!format!("{:?}", config).contains("hunter2"));
    }
}
