//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - canned responses, recorded requests
//! - [`MockClipboard`] - in-memory clipboard that can be told to fail
//! - [`RecordingSurface`] - screen state plus an ordered call log

pub mod clipboard;
pub mod http;
pub mod surface;

pub use clipboard::MockClipboard;
pub use http::{MockHttpClient, MockResponse, RecordedRequest};
pub use surface::{RecordingSurface, SurfaceEvent};
