//! Contact API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::ContactMessageCreate;
use crate::services::ContactIntakeService;
use crate::utils::{AppJson, AppResult};

#[derive(Debug, Serialize)]
pub struct ContactResponse {
    pub success: bool,
}

/// POST /contact - 提交留言
///
/// 存储失败折叠为 `{"success": false}`，真实原因见日志
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ContactMessageCreate>,
) -> AppResult<Json<ContactResponse>> {
    let intake = ContactIntakeService::new(state.get_db());
    let outcome = intake.submit(payload).await;

    Ok(Json(ContactResponse {
        success: outcome.accepted(),
    }))
}
