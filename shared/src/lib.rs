//! Shared types for the station menu service
//!
//! Common types used by both the menu server and the display/admin
//! clients: the station registry, the menu document model and the
//! hardcoded default menu used for seeding.

pub mod menu_data;
pub mod models;
pub mod stations;
pub mod util;

// Re-exports
pub use menu_data::default_sections;
pub use models::{MenuDoc, MenuItem, MenuSection};
pub use serde::{Deserialize, Serialize};
pub use stations::{STATIONS, Station, normalize_station, station_name};
