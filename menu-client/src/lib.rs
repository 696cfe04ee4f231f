//! Menu Client - display and admin client for the menu server
//!
//! Fetches per-station menus over HTTP, keeps a last-known-good local
//! cache so displays paint instantly, and provides the pure render
//! derivations (price formatting, poster chunking) the pages use.

pub mod cache;
pub mod config;
pub mod error;
pub mod http;
pub mod render;

pub use cache::MenuCache;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;

use shared::models::MenuSection;

/// Load the sections to display for a station.
///
/// Fetches fresh data and updates the cache on success. On any read
/// failure the viewer never sees an error: the cached last-known-good
/// sections are used, or the hardcoded defaults if nothing was ever
/// cached.
pub async fn load_sections(
    client: &HttpClient,
    cache: &MenuCache,
    station: &str,
) -> Vec<MenuSection> {
    match client.fetch_menu(Some(station)).await {
        Ok(doc) => {
            cache.store(station, &doc.sections);
            doc.sections
        }
        Err(e) => {
            tracing::warn!(error = %e, station, "menu fetch failed, falling back");
            cache.load(station).unwrap_or_else(shared::default_sections)
        }
    }
}
