//! API route modules
//!
//! - [`health`] - health check
//! - [`auth`] - admin login
//! - [`menu`] - station menu read/write

pub mod auth;
pub mod health;
pub mod menu;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};
