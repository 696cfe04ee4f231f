//! Data models
//!
//! Shared between menu-server and clients (via API).

pub mod menu;

// Re-exports
pub use menu::*;
