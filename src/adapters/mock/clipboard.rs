//! In-memory clipboard for testing.

use std::sync::{Arc, Mutex};

use crate::traits::{ClipboardBackend, ClipboardError};

/// Clipboard that stores copied text, or fails on demand.
#[derive(Debug, Clone, Default)]
pub struct MockClipboard {
    contents: Arc<Mutex<Vec<String>>>,
    failure: Arc<Mutex<Option<ClipboardError>>>,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose every write fails with `err`.
    pub fn failing(err: ClipboardError) -> Self {
        let clipboard = Self::new();
        clipboard.fail_with(Some(err));
        clipboard
    }

    pub fn fail_with(&self, err: Option<ClipboardError>) {
        *self.failure.lock().unwrap() = err;
    }

    /// Most recently copied text.
    pub fn last(&self) -> Option<String> {
        self.contents.lock().unwrap().last().cloned()
    }

    pub fn write_count(&self) -> usize {
        self.contents.lock().unwrap().len()
    }
}

impl ClipboardBackend for MockClipboard {
    fn name(&self) -> &'static str {
        "mock"
    }

    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_writes() {
        let clipboard = MockClipboard::new();
        clipboard.set_text("http://host/abc").unwrap();
        assert_eq!(clipboard.last(), Some("http://host/abc".to_string()));
        assert_eq!(clipboard.write_count(), 1);
    }

    #[test]
    fn test_failing() {
        let clipboard = MockClipboard::failing(ClipboardError::Unavailable("x".to_string()));
        assert!(clipboard.set_text("a").is_err());
        assert_eq!(clipboard.write_count(), 0);

        clipboard.fail_with(None);
        assert!(clipboard.set_text("a").is_ok());
    }
}
