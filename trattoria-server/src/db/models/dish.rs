//! Dish Model

use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Dish model
///
/// Identity is assigned by the store. The id is never serialized, so
/// menu listings carry no storage identifiers. Dishes are created only
/// by the seeding routine (or externally) and are never updated or
/// deleted by this service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    #[serde(default, skip_serializing)]
    pub id: Option<RecordId>,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in local currency, non-negative
    pub price: f64,
    /// Open enumeration: pizza, starter, pasta, main, dessert, drinks
    pub category: String,
    /// Image URL
    #[serde(default)]
    pub image: Option<String>,
    /// Search tags
    #[serde(default)]
    pub tags: Vec<String>,
}
