//! Small shared helpers

use chrono::{SecondsFormat, Utc};

/// Current UTC time as an RFC 3339 string with millisecond precision,
/// e.g. `2025-01-01T12:00:00.000Z`. This is the `updatedAt` format the
/// admin editor and display pages already expect.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_iso_is_utc_with_millis() {
        let ts = now_iso();
        assert!(ts.ends_with('Z'));
        // 2025-01-01T12:00:00.000Z
        assert_eq!(ts.len(), 24);
    }
}
