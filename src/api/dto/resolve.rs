//! DTOs for the redirect resolution endpoint.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

/// Request posted by the tracker page: the slug being visited plus the
/// telemetry object it collected. The telemetry shape is open and
/// extensible; it is stored opaquely, never interpreted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    #[validate(required(message = "slug is required"))]
    pub slug: Option<String>,

    #[validate(required(message = "browserData is required"))]
    pub browser_data: Option<Value>,
}

/// Response carrying the destination for the client-side navigation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveResponse {
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_nested_telemetry() {
        let req: ResolveRequest = serde_json::from_str(
            r#"{
                "slug": "abc123",
                "browserData": {
                    "userAgent": "Mozilla/5.0",
                    "screen": { "width": 1920, "height": 1080 },
                    "plugins": []
                }
            }"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.slug.as_deref(), Some("abc123"));
        assert_eq!(req.browser_data.unwrap()["screen"]["width"], 1920);
    }

    #[test]
    fn test_missing_browser_data_fails_validation() {
        let req: ResolveRequest = serde_json::from_str(r#"{ "slug": "abc123" }"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_slug_fails_validation() {
        let req: ResolveRequest =
            serde_json::from_str(r#"{ "browserData": { "a": 1 } }"#).unwrap();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_serialize_response_is_camel_case() {
        let response = ResolveResponse {
            long_url: "https://example.com".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["longUrl"], "https://example.com");
    }
}
