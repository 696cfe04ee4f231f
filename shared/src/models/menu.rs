//! Menu Model
//!
//! One menu document per station, replaced wholesale on every write.
//! Wire field names are camelCase to match the existing admin editor
//! and display pages.

use serde::{Deserialize, Serialize};

/// Default items-per-poster grouping when a section does not set one.
pub const DEFAULT_CHUNK_SIZE: u32 = 3;

/// One line on the menu.
///
/// `price` is a display string, not a number: it may hold a single
/// value like `"14900"` or a dual "A/B" value like `"14900/15700"`.
/// Formatting is the renderer's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,
    pub price: String,
}

/// A named grouping of menu items (e.g. "Bakery").
///
/// Section order inside the document is display order. `id` is used as
/// an anchor and list key by the pages; uniqueness is the editor's
/// responsibility, the server only stringifies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuSection {
    pub id: String,
    pub title: String,
    /// How many items pair with each poster image during rendering
    #[serde(default = "default_chunk_size")]
    pub chunk_size: u32,
    #[serde(default)]
    pub items: Vec<MenuItem>,
}

fn default_chunk_size() -> u32 {
    DEFAULT_CHUNK_SIZE
}

/// The per-station menu document as served by `GET /api/menu`.
///
/// `_id` is derived from the station slug (`menu:<slug>`, or the
/// legacy global `menu`). `station` is redundant with `_id` but kept
/// for readability and queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDoc {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    pub sections: Vec<MenuSection>,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_serializes_camel_case() {
        let section = MenuSection {
            id: "bebidas".to_string(),
            title: "Bebidas frías".to_string(),
            chunk_size: 6,
            items: vec![MenuItem {
                name: "Agua 500ml".to_string(),
                desc: None,
                price: "$2.450".to_string(),
            }],
        };

        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["chunkSize"], 6);
        // desc is omitted entirely when absent
        assert!(json["items"][0].get("desc").is_none());
    }

    #[test]
    fn chunk_size_defaults_when_missing() {
        let section: MenuSection =
            serde_json::from_str(r#"{"id":"cafes","title":"Cafés","items":[]}"#).unwrap();
        assert_eq!(section.chunk_size, DEFAULT_CHUNK_SIZE);
    }

    #[test]
    fn doc_round_trips_with_wire_names() {
        let doc = MenuDoc {
            id: "menu:tobago-i".to_string(),
            station: Some("tobago-i".to_string()),
            sections: vec![],
            updated_at: "2025-01-01T00:00:00.000Z".to_string(),
        };

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["_id"], "menu:tobago-i");
        assert_eq!(json["updatedAt"], "2025-01-01T00:00:00.000Z");

        let back: MenuDoc = serde_json::from_value(json).unwrap();
        assert_eq!(back, doc);
    }
}
