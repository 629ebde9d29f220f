//! Terminal selection copy via the OSC 52 escape sequence.
//!
//! Used when the system clipboard cannot be reached (SSH sessions, headless
//! Linux). The terminal emulator receives the text and places it on the
//! clipboard of the machine the user is sitting at.

use std::io::{self, Write};
use std::sync::Mutex;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

use crate::traits::{ClipboardBackend, ClipboardError};

/// Largest payload most terminals accept in one OSC 52 sequence.
const MAX_OSC52_BYTES: usize = 74_994;

/// Build the escape sequence that sets the clipboard to `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", BASE64.encode(text.as_bytes()))
}

/// Clipboard that writes OSC 52 to a terminal stream.
pub struct Osc52Clipboard {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl Osc52Clipboard {
    /// Write to the process stdout (the TUI's terminal).
    pub fn stdout() -> Self {
        Self::with_writer(Box::new(io::stdout()))
    }

    pub fn with_writer(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }
}

impl ClipboardBackend for Osc52Clipboard {
    fn name(&self) -> &'static str {
        "osc52"
    }

    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if text.is_empty() {
            return Err(ClipboardError::Empty);
        }
        let sequence = osc52_sequence(text);
        if sequence.len() > MAX_OSC52_BYTES {
            return Err(ClipboardError::WriteFailed(format!(
                "{} bytes exceeds the OSC 52 limit",
                sequence.len()
            )));
        }

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ClipboardError::Unavailable("terminal writer poisoned".to_string()))?;
        writer
            .write_all(sequence.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ClipboardError::WriteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    /// Writer that shares its buffer with the test.
    #[derive(Clone, Default)]
    struct SharedBuf(Arc<std::sync::Mutex<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_sequence_format() {
        assert_eq!(
            osc52_sequence("http://host/abc123"),
            "\x1b]52;c;aHR0cDovL2hvc3QvYWJjMTIz\x07"
        );
    }

    #[test]
    fn test_writes_sequence() {
        let buf = SharedBuf::default();
        let clipboard = Osc52Clipboard::with_writer(Box::new(buf.clone()));
        clipboard.set_text("http://host/abc123").unwrap();
        let written = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert_eq!(written, osc52_sequence("http://host/abc123"));
    }

    #[test]
    fn test_write_failure() {
        let clipboard = Osc52Clipboard::with_writer(Box::new(BrokenPipe));
        assert!(matches!(
            clipboard.set_text("x"),
            Err(ClipboardError::WriteFailed(_))
        ));
    }

    #[test]
    fn test_oversized_payload() {
        let clipboard = Osc52Clipboard::with_writer(Box::new(SharedBuf::default()));
        let huge = "a".repeat(MAX_OSC52_BYTES);
        assert!(clipboard.set_text(&huge).is_err());
        assert_eq!(clipboard.set_text(""), Err(ClipboardError::Empty));
    }
}
