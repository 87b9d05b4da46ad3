//! 存活探测路由
//!
//! # 路由列表
//!
//! | 路径 | 方法 | 说明 | 认证 |
//! |------|------|------|------|
//! | / | GET | 存活消息 | 无 |
//! | /api/hello | GET | 存活消息 | 无 |

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::core::ServerState;

/// 存活探测路由 - 公共路由 (无需认证)
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(root))
        .route("/api/hello", get(hello))
}

#[derive(Serialize)]
pub struct LivenessResponse {
    message: &'static str,
}

/// GET / - 根路径存活消息
async fn root() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Hello from the Trattoria backend!",
    })
}

/// GET /api/hello - API 存活消息
async fn hello() -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: "Hello from the backend API!",
    })
}
