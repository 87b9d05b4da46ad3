//! Reservation Intake Service
//!
//! Validates reservation payloads and persists them. Schema problems
//! and the past-dated-time business rule surface as distinct client
//! errors; persistence failures surface as server errors carrying the
//! underlying failure text. Nothing is retried.

use chrono::Utc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::ReservationCreate;
use crate::db::repository::ReservationRepository;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN, validate_optional_email,
    validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// Guest count bounds per table
const MIN_GUESTS: i64 = 1;
const MAX_GUESTS: i64 = 20;

#[derive(Clone)]
pub struct ReservationIntakeService {
    repo: ReservationRepository,
}

impl ReservationIntakeService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: ReservationRepository::new(db),
        }
    }

    /// Validate and persist one reservation.
    ///
    /// The full validated record is stored verbatim, `source` already
    /// defaulted by deserialization.
    pub async fn submit(&self, payload: ReservationCreate) -> AppResult<()> {
        validate(&payload)?;

        // 业务规则: 预订时间必须严格晚于提交时刻
        if payload.reservation_time <= Utc::now() {
            return Err(AppError::business_rule(
                "Reservation time must be in the future",
            ));
        }

        self.repo
            .create(payload.into_model())
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

        Ok(())
    }
}

/// Field-level schema checks beyond what deserialization enforces
fn validate(payload: &ReservationCreate) -> AppResult<()> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.phone, "phone", MAX_SHORT_TEXT_LEN)?;
    validate_optional_email(&payload.email, "email")?;
    if !(MIN_GUESTS..=MAX_GUESTS).contains(&payload.guests) {
        return Err(AppError::validation(format!(
            "guests must be between {MIN_GUESTS} and {MAX_GUESTS}, got {}",
            payload.guests
        )));
    }
    validate_optional_text(&payload.requests, "requests", MAX_NOTE_LEN)?;
    validate_required_text(&payload.source, "source", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}
