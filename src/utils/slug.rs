//! Slug generation and validation.
//!
//! Generation produces the candidate only; uniqueness is enforced by the
//! Link Store at write time, and callers retry on conflict.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Random bytes per generated slug. Four bytes encode to exactly six
/// URL-safe base64 characters.
const SLUG_LENGTH_BYTES: usize = 4;

/// Minimum length for user-supplied slugs.
const MIN_CUSTOM_SLUG_LEN: usize = 3;

/// Generates a random 6-character slug from the URL-safe base64 alphabet.
///
/// Uses `getrandom` for entropy and encodes the result as URL-safe base64
/// without padding.
///
/// # Panics
///
/// Panics if the system random number generator fails (extremely rare).
///
/// # Examples
///
/// ```ignore
/// let slug = generate_slug();
/// assert_eq!(slug.len(), 6);
/// ```
pub fn generate_slug() -> String {
    let mut buffer = [0u8; SLUG_LENGTH_BYTES];

    getrandom::fill(&mut buffer).expect("Failed to generate random bytes");

    base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer)
}

/// Validates a user-supplied custom slug.
///
/// # Rules
///
/// - At least 3 characters
/// - Allowed characters: letters, digits, hyphens
///
/// # Errors
///
/// Returns [`AppError::Validation`] if either rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < MIN_CUSTOM_SLUG_LEN {
        return Err(AppError::bad_request(
            "Slug must be at least 3 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(AppError::bad_request(
            "Slug can only contain letters, numbers, and hyphens",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

/// Returns true if `slug` consists solely of URL-safe slug characters.
///
/// Covers both user-supplied slugs (`[A-Za-z0-9-]`) and generated ones,
/// which may additionally contain `_` from the base64 alphabet. Used by
/// the tracker page before interpolating a slug into markup.
pub fn is_url_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
