use serde::{Deserialize, Serialize};

/// Body of `POST /shorten`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortenRequest {
    pub url: String,
}

impl ShortenRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Successful response of `POST /shorten`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShortLinkResult {
    /// Identifier assigned by the backend
    #[serde(deserialize_with = "super::deserialize_id")]
    pub short_code: String,
    /// Fully qualified short URL
    pub short_url: String,
}
