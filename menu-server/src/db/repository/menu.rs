//! Menu Repository
//!
//! One document per station in the `config` table, keyed
//! `menu:<slug>`, plus the legacy single-tenant key `menu`. Documents
//! are seeded on first read and replaced wholesale on write.

use serde::{Deserialize, Serialize};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use shared::models::{MenuDoc, MenuSection};
use shared::util::now_iso;

use super::{BaseRepository, RepoResult};

const TABLE: &str = "config";
const LEGACY_KEY: &str = "menu";

/// Addresses one menu document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuKey {
    /// Per-station document, slug already normalized by the registry
    Station(&'static str),
    /// The legacy global document (single-tenant mode)
    Legacy,
}

impl MenuKey {
    /// Record key inside the `config` table.
    pub fn record_key(&self) -> String {
        match self {
            MenuKey::Station(slug) => format!("menu:{slug}"),
            MenuKey::Legacy => LEGACY_KEY.to_string(),
        }
    }

    /// Station slug, if this is a station-scoped key.
    pub fn station(&self) -> Option<&'static str> {
        match self {
            MenuKey::Station(slug) => Some(slug),
            MenuKey::Legacy => None,
        }
    }
}

/// Stored shape of a menu document. The record id is managed by the
/// store; `MenuDoc` carries it as a plain string for the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MenuRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    station: Option<String>,
    sections: Vec<MenuSection>,
    updated_at: String,
}

#[derive(Clone)]
pub struct MenuRepository {
    base: BaseRepository,
}

impl MenuRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Get the document for `key`, seeding it if absent.
    ///
    /// A missing station document copies the legacy global document's
    /// sections when one exists, otherwise the hardcoded defaults.
    /// Seeding persists via upsert, so concurrent seeds resolve by
    /// last-write-wins (identical content, differing only in
    /// timestamp). The returned document always has sections.
    pub async fn get_or_seed(&self, key: &MenuKey) -> RepoResult<MenuDoc> {
        if let Some(record) = self.get(key).await? {
            return Ok(self.to_doc(key, record));
        }

        let sections = match key {
            MenuKey::Station(_) => match self.get(&MenuKey::Legacy).await? {
                Some(legacy) => legacy.sections,
                None => shared::default_sections(),
            },
            MenuKey::Legacy => shared::default_sections(),
        };

        let record = MenuRecord {
            station: key.station().map(str::to_string),
            sections,
            updated_at: now_iso(),
        };
        self.upsert(key, record.clone()).await?;

        tracing::info!(key = %key.record_key(), "seeded menu document");
        Ok(self.to_doc(key, record))
    }

    /// Replace the document's sections wholesale.
    ///
    /// Upsert semantics: creates the document if it does not exist,
    /// overwrites it completely otherwise. Not a merge.
    pub async fn replace(&self, key: &MenuKey, sections: Vec<MenuSection>) -> RepoResult<MenuDoc> {
        let record = MenuRecord {
            station: key.station().map(str::to_string),
            sections,
            updated_at: now_iso(),
        };
        self.upsert(key, record.clone()).await?;
        Ok(self.to_doc(key, record))
    }

    /// Raw lookup, no seeding.
    async fn get(&self, key: &MenuKey) -> RepoResult<Option<MenuRecord>> {
        let record: Option<MenuRecord> =
            self.base.db().select((TABLE, key.record_key())).await?;
        Ok(record)
    }

    async fn upsert(&self, key: &MenuKey, record: MenuRecord) -> RepoResult<()> {
        let _: Option<MenuRecord> = self
            .base
            .db()
            .upsert((TABLE, key.record_key()))
            .content(record)
            .await?;
        Ok(())
    }

    fn to_doc(&self, key: &MenuKey, record: MenuRecord) -> MenuDoc {
        MenuDoc {
            id: key.record_key(),
            station: record.station,
            sections: record.sections,
            updated_at: record.updated_at,
        }
    }
}
