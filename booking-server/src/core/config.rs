use std::path::PathBuf;
use std::time::Duration;

/// 服务器配置 - 预订服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | DATABASE_PATH | $WORK_DIR/booking.db | SQLite 文件 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false | JSON 日志 |
/// | DB_MAX_CONNECTIONS | 5 | 连接池大小 |
/// | DB_BUSY_TIMEOUT_MS | 5000 | SQLite busy_timeout |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// WORK_DIR=/data/booking HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录，存储数据库、日志等文件
    pub work_dir: String,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 默认日志级别 (RUST_LOG 优先)
    pub log_level: String,
    /// 是否输出 JSON 日志
    pub log_json: bool,
    /// 数据库连接池大小
    pub db_max_connections: u32,
    /// 写锁等待时间 (毫秒)
    pub db_busy_timeout_ms: u64,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("booking.db")
                .to_string_lossy()
                .into_owned()
        });

        Self {
            work_dir,
            database_path,
            http_port: env_or("HTTP_PORT", 3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_or("LOG_JSON", false),
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            db_busy_timeout_ms: env_or("DB_BUSY_TIMEOUT_MS", 5000),
            request_timeout_ms: env_or("REQUEST_TIMEOUT_MS", 30000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = PathBuf::from(&config.work_dir)
            .join("booking.db")
            .to_string_lossy()
            .into_owned();
        config.http_port = http_port;
        config
    }

    /// 日志目录 (work_dir/logs)
    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.db_busy_timeout_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_move_database_into_work_dir() {
        let config = Config::with_overrides("/tmp/booking-test", 4000);
        assert_eq!(config.http_port, 4000);
        assert!(config.database_path.ends_with("booking.db"));
        assert!(config.database_path.starts_with("/tmp/booking-test"));
        assert_eq!(config.log_dir(), PathBuf::from("/tmp/booking-test/logs"));
    }

    #[test]
    fn test_env_or_defaults_when_unset() {
        assert_eq!(env_or("BOOKING_TEST_SURELY_UNSET_VAR", 42u32), 42);
    }
}
