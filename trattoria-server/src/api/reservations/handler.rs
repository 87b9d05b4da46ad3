//! Reservation API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::db::models::ReservationCreate;
use crate::services::ReservationIntakeService;
use crate::utils::{AppJson, AppResult};

/// Confirmation acknowledgment for accepted reservations
#[derive(Debug, Serialize)]
pub struct ReservationResponse {
    pub success: bool,
    pub message: String,
    pub code: String,
}

/// POST /reservations - 提交预订
///
/// 400: 负载不符合模式或预订时间不在未来
/// 500: 持久化失败 (携带底层错误信息)
pub async fn create(
    State(state): State<ServerState>,
    AppJson(payload): AppJson<ReservationCreate>,
) -> AppResult<Json<ReservationResponse>> {
    let intake = ReservationIntakeService::new(state.get_db());
    intake.submit(payload).await?;

    Ok(Json(ReservationResponse {
        success: true,
        message: "Reservation received! We will confirm shortly.".to_string(),
        code: "OK".to_string(),
    }))
}
