//! Station Menu Server
//!
//! HTTP service behind the per-station menu pages and the admin price
//! editor. Each station's menu lives as one document in an embedded
//! SurrealDB store, seeded on first read and replaced wholesale on
//! each authenticated write.
//!
//! # Module structure
//!
//! ```text
//! menu-server/src/
//! ├── core/          # Config, state, server
//! ├── auth/          # JWT sessions, auth middleware
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Database layer, menu repository
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use auth::{CurrentUser, JwtConfig, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and initialize logging. Call once at process start,
/// before any configuration is read.
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_logger();
    Ok(())
}
