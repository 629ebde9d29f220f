//! Concrete implementations of the trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP transport using reqwest
//! - [`SystemClipboard`] - OS clipboard via arboard
//! - [`Osc52Clipboard`] - terminal selection copy, the clipboard fallback
//! - [`TuiSurface`] - shared screen state read by the renderer
//!
//! Test doubles live in [`mock`].

pub mod mock;
pub mod osc52_clipboard;
pub mod reqwest_http;
pub mod system_clipboard;
pub mod tui_surface;

pub use osc52_clipboard::Osc52Clipboard;
pub use reqwest_http::ReqwestHttpClient;
pub use system_clipboard::SystemClipboard;
pub use tui_surface::TuiSurface;
