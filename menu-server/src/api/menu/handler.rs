//! Menu API Handlers

use axum::{
    Json,
    body::Bytes,
    extract::{Extension, Query, State},
};
use serde::Deserialize;
use serde_json::Value;

use shared::models::MenuDoc;
use shared::normalize_station;

use super::normalize;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{MenuKey, MenuRepository};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub station: Option<String>,
}

/// A present `station` param is normalized through the registry
/// (unknown slugs fall back to the default station); an absent param
/// selects the legacy global document.
fn key_for(query: &MenuQuery) -> MenuKey {
    match query.station.as_deref() {
        Some(raw) => MenuKey::Station(normalize_station(Some(raw))),
        None => MenuKey::Legacy,
    }
}

/// GET /api/menu?station=<slug> - public read
///
/// Never 404s: a missing document is seeded from the legacy global
/// document or the hardcoded defaults before responding.
pub async fn get(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<MenuDoc>> {
    let repo = MenuRepository::new(state.db.clone());
    let doc = repo.get_or_seed(&key_for(&query)).await?;
    Ok(Json(doc))
}

/// PUT /api/menu?station=<slug> - session-gated replace
///
/// The auth middleware has already validated the session and injected
/// [`CurrentUser`]; from here the failure order is: unparseable body
/// (400 Invalid JSON), empty normalized sections (400 Invalid
/// payload), store failure (500). Success replaces the document
/// wholesale and answers `{"ok":true}`.
pub async fn update(
    State(state): State<ServerState>,
    Extension(current_user): Extension<CurrentUser>,
    Query(query): Query<MenuQuery>,
    body: Bytes,
) -> AppResult<Json<Value>> {
    let body: Value = serde_json::from_slice(&body).map_err(|_| AppError::InvalidJson)?;

    let sections = normalize::parse_sections_payload(body.get("sections").unwrap_or(&Value::Null))
        .map_err(|e| AppError::validation(e.to_string()))?;

    let key = key_for(&query);
    let repo = MenuRepository::new(state.db.clone());
    let doc = repo.replace(&key, sections).await?;

    tracing::info!(
        key = %key.record_key(),
        updated_at = %doc.updated_at,
        user = %current_user.username,
        "menu replaced"
    );

    Ok(Json(serde_json::json!({ "ok": true })))
}
