//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP transport (GET, POST)
//! - [`ClipboardBackend`] - one way of placing text on a clipboard
//! - [`Surface`] - the display state the client drives

pub mod clipboard;
pub mod http;
pub mod surface;

pub use clipboard::{ClipboardBackend, ClipboardError};
pub use http::{json_headers, Headers, HttpClient, HttpError, Response};
pub use surface::Surface;
