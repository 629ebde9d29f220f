//! System clipboard via arboard.

use std::sync::Mutex;

use crate::traits::{ClipboardBackend, ClipboardError};

/// OS clipboard (NSPasteboard, X11/Wayland selection, Windows clipboard).
///
/// The arboard handle is opened on first use and kept alive: on X11 the
/// copied text is served by the owning process, so dropping the handle right
/// after a write can lose it.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Mutex<Option<arboard::Clipboard>>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardBackend for SystemClipboard {
    fn name(&self) -> &'static str {
        "system"
    }

    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }

        let mut guard = self
            .handle
            .lock()
            .map_err(|_| ClipboardError::Unavailable("clipboard lock poisoned".to_string()))?;

        if guard.is_none() {
            let clipboard = arboard::Clipboard::new()
                .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            *guard = Some(clipboard);
        }

        let Some(clipboard) = guard.as_mut() else {
            return Err(ClipboardError::Unavailable("clipboard not initialized".to_string()));
        };

        if let Err(e) = clipboard.set_text(text) {
            // Reopen on the next attempt; the connection may have gone away.
            *guard = None;
            return Err(ClipboardError::WriteFailed(e.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_rejected_without_opening() {
        let clipboard = SystemClipboard::new();
        assert_eq!(clipboard.set_text(""), Err(ClipboardError::Empty));
        assert!(clipboard.handle.lock().unwrap().is_none());
    }
}
