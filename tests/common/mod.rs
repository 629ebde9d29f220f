//! Common test utilities for integration tests.
//!
//! ```ignore
//! let mut h = Harness::new();
//! h.http.set_response(SHORTEN_URL, shorten_ok());
//! h.client.submit("https://example.com").await?;
//! ```

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use shorty::api::ShortenerApi;
use shorty::client::ShortenerClient;
use shorty::config::ClientConfig;

/// A client wired to mocks, with handles kept for assertions.
pub struct Harness {
    pub client: ShortenerClient,
    pub http: MockHttpClient,
    pub surface: RecordingSurface,
    pub clipboard: MockClipboard,
    pub fallback: MockClipboard,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let http = MockHttpClient::new();
        let surface = RecordingSurface::new();
        let clipboard = MockClipboard::new();
        let fallback = MockClipboard::new();
        let client = ShortenerClient::new(
            ShortenerApi::new(Arc::new(http.clone()), config),
            Arc::new(surface.clone()),
            Arc::new(clipboard.clone()),
            Arc::new(fallback.clone()),
        );
        Self {
            client,
            http,
            surface,
            clipboard,
            fallback,
        }
    }

    /// Submit a URL against a canned success response.
    pub async fn submit_ok(&mut self) {
        self.http.set_response(SHORTEN_URL, shorten_ok());
        self.client
            .submit("https://example.com")
            .await
            .expect("submit should succeed");
    }
}
