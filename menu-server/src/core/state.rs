use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::JwtService;
use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Shared server state
///
/// Holds the handles every request handler needs: the configuration,
/// the embedded database connection and the JWT service. Cloning is
/// shallow (Arc / handle clones), so handlers receive it by value.
///
/// The database handle is constructed once in [`initialize`] and
/// injected here rather than referenced as an ambient singleton.
///
/// [`initialize`]: ServerState::initialize
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// JWT session service
    pub jwt_service: Arc<JwtService>,
}

impl ServerState {
    /// Manual constructor. Usually [`initialize`] is what you want.
    ///
    /// [`initialize`]: ServerState::initialize
    pub fn new(config: Config, db: Surreal<Db>, jwt_service: Arc<JwtService>) -> Self {
        Self {
            config,
            db,
            jwt_service,
        }
    }

    /// Initialize server state at process start.
    ///
    /// Creates the work directory structure, opens the embedded
    /// database at `work_dir/database` and builds the JWT service from
    /// the configured session secret.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let db_service = DbService::new(&db_dir, &config.db_namespace, &config.db_name).await?;
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));

        Ok(Self::new(config.clone(), db_service.db, jwt_service))
    }

    /// JWT service handle.
    pub fn get_jwt_service(&self) -> Arc<JwtService> {
        self.jwt_service.clone()
    }
}
