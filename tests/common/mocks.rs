//! Mock implementations for test fixtures.
//!
//! Re-exports the mocks from `shorty::adapters::mock` and adds canned
//! service responses.

pub use shorty::adapters::mock::{
    MockClipboard, MockHttpClient, MockResponse, RecordingSurface, SurfaceEvent,
};
pub use shorty::traits::{HttpError, Response};

use bytes::Bytes;

#[allow(dead_code)]
pub const SHORTEN_URL: &str = "http://localhost:8000/shorten";

#[allow(dead_code)]
pub fn stats_url(code: &str) -> String {
    format!("http://localhost:8000/stats/{}", code)
}

/// Successful create response for `abc123`.
#[allow(dead_code)]
pub fn shorten_ok() -> MockResponse {
    MockResponse::json(
        200,
        serde_json::json!({"short_code": "abc123", "short_url": "http://host/abc123"}),
    )
}

/// Successful stats response for `abc123`.
#[allow(dead_code)]
pub fn stats_ok() -> MockResponse {
    MockResponse::json(
        200,
        serde_json::json!({
            "short_code": "abc123",
            "original_url": "http://example.com",
            "visits_count": 42,
            "created_at": "2024-01-15T10:30:00Z"
        }),
    )
}

/// Failure response with a `detail` message.
#[allow(dead_code)]
pub fn rejected(status: u16, detail: &str) -> MockResponse {
    MockResponse::json(status, serde_json::json!({ "detail": detail }))
}

/// Failure response whose body is not JSON.
#[allow(dead_code)]
pub fn html_error(status: u16) -> MockResponse {
    MockResponse::Success(Response::new(status, Bytes::from("<html>error</html>")))
}
