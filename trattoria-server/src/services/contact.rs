//! Contact Intake Service
//!
//! Persists contact messages best-effort. A storage failure is not an
//! HTTP error here: the website form treats the submission as soft-failed
//! and asks the visitor to try again, so the outcome collapses to a
//! boolean at the API surface while the real cause goes to the log.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::ContactMessageCreate;
use crate::db::repository::{ContactMessageRepository, RepoError};

/// Outcome of a best-effort contact submission.
///
/// Kept as a distinct type so the store failure stays observable
/// internally even though the HTTP response collapses it to
/// `{"success": false}`.
#[derive(Debug)]
pub enum ContactOutcome {
    Stored,
    StoreFailed(RepoError),
}

impl ContactOutcome {
    pub fn accepted(&self) -> bool {
        matches!(self, ContactOutcome::Stored)
    }
}

#[derive(Clone)]
pub struct ContactIntakeService {
    repo: ContactMessageRepository,
}

impl ContactIntakeService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            repo: ContactMessageRepository::new(db),
        }
    }

    /// Persist one contact message, swallowing storage failures.
    pub async fn submit(&self, payload: ContactMessageCreate) -> ContactOutcome {
        match self.repo.create(payload.into_model()).await {
            Ok(_) => ContactOutcome::Stored,
            Err(e) => {
                tracing::warn!("Contact message not stored: {}", e);
                ContactOutcome::StoreFailed(e)
            }
        }
    }
}
