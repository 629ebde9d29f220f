//! Error handling for the shortener client.
//!
//! | Type | Raised by | Shown as |
//! |------|-----------|----------|
//! | [`ValidationError`] | local URL checks | error banner |
//! | [`RequestError`] | create/stats calls | error banner (service `detail` or fallback) |
//! | [`crate::traits::ClipboardError`] | both copy backends failing | error banner |
//!
//! All of them fold into [`ShortyError`]; [`ShortyResult`] is the alias used
//! by client operations.

mod category;
mod request;
mod shorty_error;
mod validation;

pub use category::ErrorCategory;
pub use request::{ApiOperation, RequestError, GENERIC_FAILURE};
pub use shorty_error::ShortyError;
pub use validation::ValidationError;

/// Type alias for Results using ShortyError.
pub type ShortyResult<T> = Result<T, ShortyError>;
