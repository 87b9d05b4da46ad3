//! Contact Message Repository

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::ContactMessage;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "contact";

#[derive(Clone)]
pub struct ContactMessageRepository {
    base: BaseRepository,
}

impl ContactMessageRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Persist a contact message as a single document insert
    pub async fn create(&self, message: ContactMessage) -> RepoResult<ContactMessage> {
        let created: Option<ContactMessage> =
            self.base.db().create(TABLE).content(message).await?;
        created.ok_or_else(|| RepoError::Database("Failed to insert contact message".to_string()))
    }
}
