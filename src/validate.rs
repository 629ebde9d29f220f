//! Local URL checks run before any request is made.

use url::Url;

use crate::error::ValidationError;

/// Trim `raw` and check that it parses as an absolute URL.
///
/// Returns the trimmed text unchanged (not the normalized form) so the
/// service receives exactly what the user typed.
pub fn validate_url(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }
    match Url::parse(trimmed) {
        Ok(_) => Ok(trimmed.to_string()),
        Err(err) => {
            tracing::debug!("Rejected URL input: {}", err);
            Err(ValidationError::Malformed)
        }
    }
}
