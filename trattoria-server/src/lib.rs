//! Trattoria Backend - 餐厅菜单与预订后端服务
//!
//! # 架构概述
//!
//! 本模块是后端服务的主入口，提供以下核心功能：
//!
//! - **菜单目录** (`services::catalog`): 首次启动种子数据 + 多字段模糊检索
//! - **预订接收** (`services::reservations`): 预订校验与持久化
//! - **留言接收** (`services::contact`): 尽力而为的留言持久化
//! - **数据库** (`db`): 嵌入式 SurrealDB 文档存储
//! - **HTTP API** (`api`): RESTful API 接口
//!
//! # 模块结构
//!
//! ```text
//! trattoria-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 菜单目录、预订、留言服务
//! ├── db/            # 数据库层 (模型 + 仓储)
//! └── utils/         # 错误、日志、校验工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::server::build_app;
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// 设置进程环境 (dotenv + 日志)
///
/// 必须在读取 [`Config`] 之前调用
pub fn setup_environment() {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
  ______           __  __             _
 /_  __/________ _/ /_/ /_____  _____(_)___ _
  / / / ___/ __ `/ __/ __/ __ \/ ___/ / __ `/
 / / / /  / /_/ / /_/ /_/ /_/ / /  / / /_/ /
/_/ /_/   \__,_/\__/\__/\____/_/  /_/\__,_/
    "#
    );
}
