//! Contact Message Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Contact message model
///
/// Free-form message from the website contact form. No validation
/// beyond the required fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

/// Inbound contact payload, strict at the boundary
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContactMessageCreate {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactMessageCreate {
    pub fn into_model(self) -> ContactMessage {
        ContactMessage {
            id: None,
            name: self.name,
            email: self.email,
            phone: self.phone,
            message: self.message,
        }
    }
}
