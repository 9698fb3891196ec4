use shared::models::catalog::DEFAULT_CAPACITY;
use std::path::PathBuf;

/// 存储引擎
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseEngine {
    /// 内存数据库，进程退出即丢失 (默认)
    Memory,
    /// RocksDB，持久化到 `WORK_DIR/database`
    RocksDb,
}

impl DatabaseEngine {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" | "mem" => Some(Self::Memory),
            "rocksdb" | "rocks" => Some(Self::RocksDb),
            _ => None,
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | WORK_DIR | ./work_dir | 工作目录 (日志、数据库) |
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | MALL_CAPACITY | 60 | 商场铺位总数 (用于入驻率) |
/// | DATABASE_ENGINE | memory | memory 或 rocksdb |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_JSON | false (production 为 true) | JSON 格式控制台日志 |
/// | LOG_TO_FILE | false | 按天滚动写入 WORK_DIR/logs |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// HTTP_PORT=8080 MALL_CAPACITY=80 cargo run -p mall-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 工作目录
    pub work_dir: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 商场铺位总数
    pub capacity: u32,
    pub database_engine: DatabaseEngine,
    /// 运行环境: development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 未设置或无法解析的变量使用默认值
    pub fn from_env() -> Self {
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let production = environment == "production";

        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./work_dir".into()),
            http_port: env_parse("HTTP_PORT").unwrap_or(8000),
            capacity: env_parse("MALL_CAPACITY").unwrap_or(DEFAULT_CAPACITY),
            database_engine: std::env::var("DATABASE_ENGINE")
                .ok()
                .and_then(|v| DatabaseEngine::parse(&v))
                .unwrap_or(DatabaseEngine::Memory),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json: env_parse("LOG_JSON").unwrap_or(production),
            log_to_file: env_parse("LOG_TO_FILE").unwrap_or(false),
            request_timeout_ms: env_parse("REQUEST_TIMEOUT_MS").unwrap_or(30000),
            environment,
        }
    }

    /// 测试用配置：内存数据库，不读取环境变量
    pub fn for_tests() -> Self {
        Self {
            work_dir: "./work_dir".into(),
            http_port: 0,
            capacity: DEFAULT_CAPACITY,
            database_engine: DatabaseEngine::Memory,
            environment: "test".into(),
            log_level: "warn".into(),
            log_json: false,
            log_to_file: false,
            request_timeout_ms: 30000,
        }
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
