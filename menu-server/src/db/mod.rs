//! Database Module
//!
//! Owns the embedded SurrealDB handle.

pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

/// Database service. Opens the embedded store and selects the
/// configured namespace and database.
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    pub async fn new(path: &Path, namespace: &str, database: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(namespace)
            .use_db(database)
            .await
            .map_err(|e| AppError::database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            path = %path.display(),
            ns = namespace,
            db = database,
            "Database connection established"
        );

        Ok(Self { db })
    }
}
