//! Click log entity; one immutable analytics record per resolved redirect.

use chrono::{DateTime, Utc};
use serde_json::Value;

/// A per-click analytics record, appended under the owning link's
/// `(tenant_id, owner_id)` partition.
///
/// `payload` is the telemetry object collected by the tracker page
/// (navigator, screen, connection, performance fields). It is opaque to
/// the core: stored as-is, never interpreted.
///
/// `ip_address` and `country` are derived from the request on the server
/// side, never taken from the client payload. `timestamp` is likewise
/// server-assigned.
#[derive(Debug, Clone)]
pub struct NewClickLog {
    pub slug: String,
    /// The long URL the client was sent to, captured for audit.
    pub redirected_to: String,
    pub ip_address: String,
    pub country: String,
    pub payload: Value,
    pub timestamp: DateTime<Utc>,
}

impl NewClickLog {
    pub fn new(
        slug: String,
        redirected_to: String,
        ip_address: String,
        country: String,
        payload: Value,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            slug,
            redirected_to,
            ip_address,
            country,
            payload,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_click_log_creation() {
        let now = Utc::now();
        let log = NewClickLog::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            "203.0.113.9".to_string(),
            "DE".to_string(),
            json!({ "userAgent": "TestBot/1.0" }),
            now,
        );

        assert_eq!(log.slug, "abc123");
        assert_eq!(log.redirected_to, "https://example.com");
        assert_eq!(log.ip_address, "203.0.113.9");
        assert_eq!(log.country, "DE");
        assert_eq!(log.timestamp, now);
        assert_eq!(log.payload["userAgent"], "TestBot/1.0");
    }

    #[test]
    fn test_click_log_payload_is_opaque() {
        let log = NewClickLog::new(
            "s".to_string(),
            "https://example.com".to_string(),
            "unknown".to_string(),
            "unknown".to_string(),
            json!({ "nested": { "screen": { "width": 1920 } }, "plugins": [] }),
            Utc::now(),
        );

        assert_eq!(log.payload["nested"]["screen"]["width"], 1920);
    }
}
