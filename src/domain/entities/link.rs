//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened link owned by a `(tenant_id, owner_id)` partition.
///
/// The `slug` is unique across the whole system, not just within its
/// partition, so that resolution can work from a bare slug with no tenant
/// context.
#[derive(Debug, Clone)]
pub struct Link {
    pub slug: String,
    pub long_url: String,
    pub owner_id: String,
    pub tenant_id: String,
    /// Total successful resolutions. Monotonically non-decreasing.
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
    pub preview: LinkPreview,
}

/// Optional social-preview metadata rendered as Open Graph tags on the
/// tracker page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinkPreview {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_url: Option<String>,
}

impl LinkPreview {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.image_url.is_none()
    }
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        slug: String,
        long_url: String,
        owner_id: String,
        tenant_id: String,
        click_count: i64,
        created_at: DateTime<Utc>,
        preview: LinkPreview,
    ) -> Self {
        Self {
            slug,
            long_url,
            owner_id,
            tenant_id,
            click_count,
            created_at,
            preview,
        }
    }
}

/// Input data for reserving a new link.
///
/// `click_count` and `created_at` are assigned by the store on insert.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub slug: String,
    pub long_url: String,
    pub owner_id: String,
    pub tenant_id: String,
    pub preview: LinkPreview,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_link_creation() {
        let now = Utc::now();
        let link = Link::new(
            "abc123".to_string(),
            "https://example.com".to_string(),
            "u1".to_string(),
            "a1".to_string(),
            0,
            now,
            LinkPreview::default(),
        );

        assert_eq!(link.slug, "abc123");
        assert_eq!(link.long_url, "https://example.com");
        assert_eq!(link.owner_id, "u1");
        assert_eq!(link.tenant_id, "a1");
        assert_eq!(link.click_count, 0);
        assert_eq!(link.created_at, now);
        assert!(link.preview.is_empty());
    }

    #[test]
    fn test_link_with_preview() {
        let preview = LinkPreview {
            title: Some("Shared Link".to_string()),
            description: None,
            image_url: Some("https://example.com/cover.png".to_string()),
        };
        let link = Link::new(
            "promo".to_string(),
            "https://example.com/sale".to_string(),
            "u2".to_string(),
            "a1".to_string(),
            7,
            Utc::now(),
            preview.clone(),
        );

        assert!(!link.preview.is_empty());
        assert_eq!(link.preview, preview);
    }

    #[test]
    fn test_new_link_creation() {
        let new_link = NewLink {
            slug: "xyz789".to_string(),
            long_url: "https://rust-lang.org".to_string(),
            owner_id: "owner".to_string(),
            tenant_id: "tenant".to_string(),
            preview: LinkPreview::default(),
        };

        assert_eq!(new_link.slug, "xyz789");
        assert_eq!(new_link.long_url, "https://rust-lang.org");
        assert_eq!(new_link.tenant_id, "tenant");
    }

    #[test]
    fn test_preview_is_empty_with_any_field() {
        let preview = LinkPreview {
            title: None,
            description: Some("desc".to_string()),
            image_url: None,
        };
        assert!(!preview.is_empty());
    }
}
