//! Menu API Module

mod handler;
pub mod normalize;

use axum::{Router, routing::get};

use crate::core::ServerState;

/// Menu router. Read is public, write is gated by the auth middleware.
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/menu", get(handler::get).put(handler::update))
}
