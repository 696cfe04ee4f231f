//! Client configuration

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL, without trailing slash
    pub base_url: String,
    /// Directory for the last-known-good menu cache
    pub cache_dir: PathBuf,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            cache_dir: cache_dir.into(),
        }
    }
}
