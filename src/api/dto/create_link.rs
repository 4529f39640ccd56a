//! DTOs for the link creation endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// Required fields are `Option` so their absence surfaces as the 400
/// validation taxonomy instead of a deserialization failure. Wire names
/// are camelCase, matching the tracker page and the public API.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    /// The destination URL (must be an absolute HTTP/HTTPS URL).
    #[validate(required(message = "longUrl is required"))]
    pub long_url: Option<String>,

    /// Optional custom slug (validated for length and characters).
    pub custom_slug: Option<String>,

    #[validate(required(message = "ownerId is required"))]
    pub owner_id: Option<String>,

    #[validate(required(message = "tenantId is required"))]
    pub tenant_id: Option<String>,

    /// Optional social-preview fields rendered as Open Graph tags.
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

/// Response for a successfully created link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub slug: String,
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_request() {
        let req: CreateLinkRequest = serde_json::from_str(
            r#"{
                "longUrl": "https://example.com",
                "customSlug": "promo",
                "ownerId": "u1",
                "tenantId": "a1",
                "title": "Sale",
                "imageUrl": "https://example.com/cover.png"
            }"#,
        )
        .unwrap();

        assert!(req.validate().is_ok());
        assert_eq!(req.long_url.as_deref(), Some("https://example.com"));
        assert_eq!(req.custom_slug.as_deref(), Some("promo"));
        assert_eq!(req.image_url.as_deref(), Some("https://example.com/cover.png"));
        assert!(req.description.is_none());
    }

    #[test]
    fn test_missing_long_url_fails_validation() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{ "ownerId": "u1", "tenantId": "a1" }"#).unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_missing_tenant_fails_validation() {
        let req: CreateLinkRequest =
            serde_json::from_str(r#"{ "longUrl": "https://example.com", "ownerId": "u1" }"#)
                .unwrap();

        assert!(req.validate().is_err());
    }

    #[test]
    fn test_serialize_response_is_camel_case() {
        let response = CreateLinkResponse {
            slug: "abc123".to_string(),
            long_url: "https://example.com".to_string(),
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["slug"], "abc123");
        assert_eq!(json["longUrl"], "https://example.com");
    }
}
