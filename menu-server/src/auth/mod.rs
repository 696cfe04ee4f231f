//! Authentication
//!
//! JWT session tokens for the admin editor plus the axum middleware
//! that gates write routes.

pub mod jwt;
pub mod middleware;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::require_auth;
