use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;

/// 服务器状态 - 持有全进程共享的资源
///
/// ServerState 是后端的核心数据结构，在启动时初始化一次，
/// 随后以浅拷贝 (内部引用计数) 注入每个请求处理器。
///
/// # 字段
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | Surreal<Db> | 嵌入式文档存储句柄 |
///
/// 存储客户端对并发的独立操作是任务安全的，无需额外加锁。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 嵌入式文档存储 (SurrealDB)
    pub db: Surreal<Db>,
}

impl ServerState {
    /// 初始化服务器状态
    ///
    /// 打开文档存储并选择命名空间/数据库。存储配置缺失时回落到
    /// 内存引擎，不视为启动失败。
    ///
    /// # Panics
    ///
    /// 存储引擎打开失败时 panic
    pub async fn initialize(config: &Config) -> Self {
        let db_service = DbService::new(config)
            .await
            .expect("Failed to initialize document store");

        Self {
            config: config.clone(),
            db: db_service.db,
        }
    }

    /// 获取文档存储句柄
    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
