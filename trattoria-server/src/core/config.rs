/// 服务器配置 - 后端服务的所有配置项
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 8000 | HTTP 服务端口 |
/// | DATABASE_PATH | (未设置) | 文档存储数据目录；未设置时使用内存引擎 |
/// | DATABASE_NAME | trattoria | 文档存储数据库名 |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_DIR | (未设置) | 日志文件目录 |
///
/// 存储配置缺失不会阻止启动，仅通过 `GET /test` 诊断接口暴露。
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/trattoria HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 文档存储数据目录 (RocksDB 引擎)；`None` 时回落到内存引擎
    pub database_path: Option<String>,
    /// 文档存储数据库名；`None` 时使用默认名
    pub database_name: Option<String>,
    /// 运行环境: development | production
    pub environment: String,
    /// 日志文件目录
    pub log_dir: Option<String>,
}

/// DATABASE_NAME 未设置时的默认数据库名
pub const DEFAULT_DATABASE_NAME: &str = "trattoria";

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_path: std::env::var("DATABASE_PATH").ok(),
            database_name: std::env::var("DATABASE_NAME").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 测试配置: 内存存储引擎，不读取环境变量
    pub fn for_tests() -> Self {
        Self {
            http_port: 0,
            database_path: None,
            database_name: Some("test".into()),
            environment: "test".into(),
            log_dir: None,
        }
    }

    /// 有效的数据库名 (带默认值)
    pub fn database_name(&self) -> &str {
        self.database_name.as_deref().unwrap_or(DEFAULT_DATABASE_NAME)
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
