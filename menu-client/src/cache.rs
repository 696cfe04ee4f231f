//! Last-known-good menu cache
//!
//! One JSON file per station under the cache directory. A failed
//! fetch falls back to whatever was stored last; a corrupt or
//! missing file simply yields nothing.

use std::fs;
use std::path::{Path, PathBuf};

use shared::models::MenuSection;

const CACHE_PREFIX: &str = "menu-cache-v1";

#[derive(Debug, Clone)]
pub struct MenuCache {
    dir: PathBuf,
}

impl MenuCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, station: &str) -> PathBuf {
        self.dir.join(format!("{CACHE_PREFIX}-{station}.json"))
    }

    /// Read the cached sections for a station, if present and valid.
    pub fn load(&self, station: &str) -> Option<Vec<MenuSection>> {
        let raw = fs::read_to_string(self.path_for(station)).ok()?;
        let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
        if !value.is_array() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Persist sections for a station. Best effort: a full disk or
    /// unwritable directory only costs the fallback, not the render.
    pub fn store(&self, station: &str, sections: &[MenuSection]) {
        if let Err(e) = self.try_store(station, sections) {
            tracing::warn!(error = %e, station, "failed to write menu cache");
        }
    }

    fn try_store(&self, station: &str, sections: &[MenuSection]) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string(sections).map_err(std::io::Error::other)?;
        fs::write(self.path_for(station), json)
    }
}

impl AsRef<Path> for MenuCache {
    fn as_ref(&self) -> &Path {
        &self.dir
    }
}
