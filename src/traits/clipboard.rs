//! Clipboard abstraction.
//!
//! Copying goes through two backends: the system clipboard first, and a
//! terminal selection copy as the fallback when the system clipboard is
//! unavailable (headless sessions, SSH, sandboxed terminals).

use thiserror::Error;

/// Clipboard operation errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    /// The backend could not be opened at all
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    /// The backend opened but refused the write
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),

    /// Nothing to copy
    #[error("Nothing to copy")]
    Empty,
}

/// A single mechanism able to place text on a clipboard.
pub trait ClipboardBackend: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Write `text` to the clipboard.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}
