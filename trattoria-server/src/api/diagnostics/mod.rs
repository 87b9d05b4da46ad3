//! 存储诊断路由
//!
//! `GET /test` 报告存储可达性、连接配置标志和已有集合名，
//! 用于部署后快速确认后端与文档存储的接线是否正常。

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/test", get(diagnostics))
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    /// 状态 (ok | error)
    status: &'static str,
    /// 错误信息
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl CheckResult {
    fn ok() -> Self {
        Self {
            status: "ok",
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: Some(message.into()),
        }
    }
}

#[derive(Serialize)]
pub struct DiagnosticsResponse {
    /// 后端状态，始终 "running"
    backend: &'static str,
    /// 存储探测结果
    store: CheckResult,
    /// DATABASE_PATH 是否已配置
    database_path_set: bool,
    /// DATABASE_NAME 是否已配置
    database_name_set: bool,
    /// 已有集合名 (最多 10 个)
    collections: Vec<String>,
}

/// GET /test - 存储诊断
async fn diagnostics(State(state): State<ServerState>) -> Json<DiagnosticsResponse> {
    let (store, collections) = match list_tables(&state.db).await {
        Ok(tables) => (CheckResult::ok(), tables),
        Err(e) => (CheckResult::error(e.to_string()), Vec::new()),
    };

    Json(DiagnosticsResponse {
        backend: "running",
        store,
        database_path_set: state.config.database_path.is_some(),
        database_name_set: state.config.database_name.is_some(),
        collections,
    })
}

/// 探测存储并列出当前数据库的表名
async fn list_tables(db: &Surreal<Db>) -> Result<Vec<String>, surrealdb::Error> {
    let mut res = db.query("INFO FOR DB").await?;
    let info: Option<serde_json::Value> = res.take(0)?;

    let mut tables: Vec<String> = info
        .as_ref()
        .and_then(|v| v.get("tables"))
        .and_then(|t| t.as_object())
        .map(|m| m.keys().cloned().collect())
        .unwrap_or_default();

    tables.sort();
    tables.truncate(10);
    Ok(tables)
}
