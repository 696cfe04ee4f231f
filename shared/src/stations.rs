//! Station Registry
//!
//! Fixed set of deployed stations. The set is part of configuration,
//! not data: stations are never created or deleted at runtime, and
//! every menu document is keyed by one of these slugs.

/// One physical location with its own editable menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Station {
    /// Stable short identifier, used in URLs and document keys
    pub slug: &'static str,
    /// Display name shown in page headers
    pub name: &'static str,
}

/// All deployed stations, in display order. The first entry is the
/// fallback for unknown or missing slugs.
pub const STATIONS: &[Station] = &[
    Station {
        slug: "catania-gen",
        name: "CATANIA GEN",
    },
    Station {
        slug: "combustibles-canning",
        name: "COMBUSTIBLES CANNING",
    },
    Station {
        slug: "monteverde-sa",
        name: "MONTEVERDE SA",
    },
    Station {
        slug: "tobago-i",
        name: "TOBAGO I",
    },
    Station {
        slug: "tobago-ii",
        name: "TOBAGO II",
    },
    Station {
        slug: "bettica-sa",
        name: "BETTICA SA",
    },
];

/// Normalize an untrusted station slug to a registered one.
///
/// Lowercases the input and looks it up in [`STATIONS`]. Unknown,
/// empty or missing slugs resolve to the first station. Total and
/// idempotent, so handlers can call it on raw query input directly.
pub fn normalize_station(raw: Option<&str>) -> &'static str {
    let lowered = raw.unwrap_or_default().to_lowercase();
    STATIONS
        .iter()
        .find(|s| s.slug == lowered)
        .map(|s| s.slug)
        .unwrap_or(STATIONS[0].slug)
}

/// Display name for a registered slug.
pub fn station_name(slug: &str) -> Option<&'static str> {
    STATIONS.iter().find(|s| s.slug == slug).map(|s| s.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_slug_passes_through() {
        assert_eq!(normalize_station(Some("tobago-i")), "tobago-i");
        assert_eq!(normalize_station(Some("bettica-sa")), "bettica-sa");
    }

    #[test]
    fn lookup_is_case_insensitive() {
        for station in STATIONS {
            let upper = station.slug.to_uppercase();
            assert_eq!(normalize_station(Some(&upper)), station.slug);
        }
    }

    #[test]
    fn normalization_is_idempotent() {
        for station in STATIONS {
            let once = normalize_station(Some(station.slug));
            assert_eq!(normalize_station(Some(once)), once);
        }
    }

    #[test]
    fn unknown_empty_and_missing_fall_back_to_first() {
        assert_eq!(normalize_station(Some("no-such-station")), STATIONS[0].slug);
        assert_eq!(normalize_station(Some("")), STATIONS[0].slug);
        assert_eq!(normalize_station(None), STATIONS[0].slug);
    }

    #[test]
    fn station_name_resolves_registered_slugs_only() {
        assert_eq!(station_name("catania-gen"), Some("CATANIA GEN"));
        assert_eq!(station_name("unknown"), None);
    }
}
