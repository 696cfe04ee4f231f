//! Payload normalization
//!
//! Converts an untrusted request body into well-typed sections. The
//! normalization pass is total: wrong-typed fields collapse to
//! defaults rather than rejecting the payload. The one validation
//! gate lives in [`parse_sections_payload`]: an empty result (which
//! covers both non-array input and a literal empty array) is refused,
//! so a malformed submission and an intentionally cleared menu are
//! indistinguishable. That matches the behavior the admin editor has
//! always seen.

use serde_json::Value;
use thiserror::Error;

use shared::models::{DEFAULT_CHUNK_SIZE, MenuItem, MenuSection};

#[derive(Debug, Error, PartialEq)]
pub enum PayloadError {
    #[error("Invalid payload: sections[]")]
    Empty,
}

/// Normalize and validate the `sections` value of a write request.
///
/// The tagged wrapper around [`normalize_sections`]: success carries
/// the default-filled sections, failure means there is nothing to
/// store.
pub fn parse_sections_payload(input: &Value) -> Result<Vec<MenuSection>, PayloadError> {
    let sections = normalize_sections(input);
    if sections.is_empty() {
        return Err(PayloadError::Empty);
    }
    Ok(sections)
}

/// Normalize arbitrary JSON into menu sections. Total, never fails.
///
/// Non-array input yields an empty vec. Per element: `id` and `title`
/// coerce to strings (default `""`), `chunkSize` to a finite number
/// (default 3), `items` to a possibly-empty list with `name`/`price`
/// as strings and `desc` as string-or-absent.
pub fn normalize_sections(input: &Value) -> Vec<MenuSection> {
    let Some(sections) = input.as_array() else {
        return Vec::new();
    };

    sections
        .iter()
        .map(|s| MenuSection {
            id: to_str(s.get("id")),
            title: to_str(s.get("title")),
            chunk_size: to_chunk_size(s.get("chunkSize")),
            items: s
                .get("items")
                .and_then(Value::as_array)
                .map(|items| items.iter().map(normalize_item).collect())
                .unwrap_or_default(),
        })
        .collect()
}

fn normalize_item(item: &Value) -> MenuItem {
    MenuItem {
        name: to_str(item.get("name")),
        desc: item
            .get("desc")
            .and_then(Value::as_str)
            .map(str::to_string),
        price: to_str(item.get("price")),
    }
}

fn to_str(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Coerce `chunkSize` to a usable integer. Numeric strings count as
/// numbers; anything missing or non-finite falls back to the default.
/// Negative values saturate to 0 and are clamped by the renderer.
fn to_chunk_size(value: Option<&Value>) -> u32 {
    let number = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number
        .filter(|n| n.is_finite())
        .map(|n| n as u32)
        .unwrap_or(DEFAULT_CHUNK_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_array_input_yields_empty() {
        assert!(normalize_sections(&json!(null)).is_empty());
        assert!(normalize_sections(&json!("sections")).is_empty());
        assert!(normalize_sections(&json!({"sections": []})).is_empty());
        assert!(normalize_sections(&json!(42)).is_empty());
    }

    #[test]
    fn empty_object_becomes_default_section() {
        let sections = normalize_sections(&json!([{}]));
        assert_eq!(
            sections,
            vec![MenuSection {
                id: String::new(),
                title: String::new(),
                chunk_size: 3,
                items: vec![],
            }]
        );
    }

    #[test]
    fn wrong_types_collapse_to_defaults() {
        let sections = normalize_sections(&json!([{
            "id": 7,
            "title": ["not", "a", "string"],
            "chunkSize": "banana",
            "items": [{"name": 1, "desc": 2, "price": {}}],
        }]));

        assert_eq!(sections.len(), 1);
        let s = &sections[0];
        assert_eq!(s.id, "");
        assert_eq!(s.title, "");
        assert_eq!(s.chunk_size, 3);
        assert_eq!(s.items.len(), 1);
        assert_eq!(s.items[0].name, "");
        assert_eq!(s.items[0].desc, None);
        assert_eq!(s.items[0].price, "");
    }

    #[test]
    fn well_formed_sections_pass_through() {
        let sections = normalize_sections(&json!([{
            "id": "bebidas",
            "title": "Bebidas frías",
            "chunkSize": 6,
            "items": [
                {"name": "Agua 500ml", "price": "2450"},
                {"name": "Gaseosa", "desc": "600ml", "price": "2200/2600"},
            ],
        }]));

        assert_eq!(sections.len(), 1);
        let s = &sections[0];
        assert_eq!(s.id, "bebidas");
        assert_eq!(s.chunk_size, 6);
        assert_eq!(s.items[0].desc, None);
        assert_eq!(s.items[1].desc.as_deref(), Some("600ml"));
        assert_eq!(s.items[1].price, "2200/2600");
    }

    #[test]
    fn numeric_string_chunk_size_is_accepted() {
        let sections = normalize_sections(&json!([{"chunkSize": "6"}]));
        assert_eq!(sections[0].chunk_size, 6);
    }

    #[test]
    fn items_defaults_to_empty_when_not_an_array() {
        let sections = normalize_sections(&json!([{"items": "nope"}]));
        assert!(sections[0].items.is_empty());
    }

    #[test]
    fn payload_gate_rejects_empty_and_non_array_alike() {
        assert_eq!(
            parse_sections_payload(&json!([])),
            Err(PayloadError::Empty)
        );
        assert_eq!(
            parse_sections_payload(&json!(null)),
            Err(PayloadError::Empty)
        );
        assert!(parse_sections_payload(&json!([{}])).is_ok());
    }
}
