//! Database Module
//!
//! Opens the embedded SurrealDB document store and selects the
//! namespace/database pair used by all repositories.

pub mod models;
pub mod repository;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

use crate::core::Config;
use crate::utils::AppError;

/// 命名空间固定为单租户
const NAMESPACE: &str = "trattoria";

/// Database service owning the embedded document store handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the document store described by `config`.
    ///
    /// `DATABASE_PATH` set → persistent RocksDB engine at that directory.
    /// `DATABASE_PATH` unset → in-memory engine; the server still works,
    /// records just do not survive a restart. Absence is reported through
    /// the `/test` diagnostic endpoint, never as a startup failure.
    pub async fn new(config: &Config) -> Result<Self, AppError> {
        let db = match config.database_path.as_deref() {
            Some(path) => {
                let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
                    .await
                    .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
                tracing::info!("Document store opened (RocksDB at {path})");
                db
            }
            None => {
                let db: Surreal<Db> = Surreal::new::<Mem>(())
                    .await
                    .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
                tracing::warn!("DATABASE_PATH not set, using in-memory document store");
                db
            }
        };

        db.use_ns(NAMESPACE)
            .use_db(config.database_name())
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        Ok(Self { db })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn opens_in_memory_store_without_database_path() {
        let config = Config::for_tests();
        let service = DbService::new(&config).await.unwrap();

        let mut res = service.db.query("RETURN 1").await.unwrap();
        let one: Option<i64> = res.take(0).unwrap();
        assert_eq!(one, Some(1));
    }

    #[tokio::test]
    async fn opens_persistent_store_with_database_path() {
        let tmp = tempfile::tempdir().unwrap();
        let mut config = Config::for_tests();
        config.database_path = Some(tmp.path().to_string_lossy().into_owned());

        let service = DbService::new(&config).await.unwrap();
        let mut res = service.db.query("RETURN 1").await.unwrap();
        let one: Option<i64> = res.take(0).unwrap();
        assert_eq!(one, Some(1));
    }
}
