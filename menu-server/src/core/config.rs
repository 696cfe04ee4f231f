use std::path::PathBuf;

use crate::auth::JwtConfig;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/menu-server | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | DB_NAMESPACE | estacion | SurrealDB namespace |
/// | DB_NAME | menu | SurrealDB database name |
/// | ADMIN_USERNAME | admin | Admin login name |
/// | ADMIN_PASSWORD | (unset) | Admin password, plain or argon2 PHC hash |
/// | SESSION_SECRET | (generated in dev) | JWT signing secret |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// SurrealDB namespace
    pub db_namespace: String,
    /// SurrealDB database name
    pub db_name: String,
    /// Admin login name
    pub admin_username: String,
    /// Admin password. Either a plain value or an argon2 PHC string
    /// (`$argon2...`), detected at verification time.
    pub admin_password: String,
    /// JWT session configuration
    pub jwt: JwtConfig,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/menu-server".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            db_namespace: std::env::var("DB_NAMESPACE").unwrap_or_else(|_| "estacion".into()),
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "menu".into()),
            admin_username: std::env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".into()),
            admin_password: std::env::var("ADMIN_PASSWORD").unwrap_or_default(),
            jwt: JwtConfig::default(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the work dir and port on top of the env config.
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory the embedded database lives in.
    pub fn database_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("database")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
