//! Reservation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Reservation model
///
/// Created once per submission, immutable thereafter. The API surface
/// never reads reservations back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    pub reservation_time: DateTime<Utc>,
    pub guests: i64,
    #[serde(default)]
    pub requests: Option<String>,
    pub source: String,
}

/// Inbound reservation payload
///
/// Strict at the boundary: unknown fields are rejected before any
/// validation or persistence happens.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReservationCreate {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub reservation_time: DateTime<Utc>,
    pub guests: i64,
    pub requests: Option<String>,
    #[serde(default = "default_source")]
    pub source: String,
}

fn default_source() -> String {
    "website".to_string()
}

impl ReservationCreate {
    /// Convert the validated payload into the persisted record, verbatim.
    pub fn into_model(self) -> Reservation {
        Reservation {
            id: None,
            name: self.name,
            phone: self.phone,
            email: self.email,
            reservation_time: self.reservation_time,
            guests: self.guests,
            requests: self.requests,
            source: self.source,
        }
    }
}
