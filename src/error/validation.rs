//! Local input validation errors.

use thiserror::Error;

/// Input rejected before any request is made.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Nothing left after trimming whitespace
    #[error("Please enter a valid URL")]
    Empty,

    /// Not an absolute URL with a scheme
    #[error("Please enter a valid URL (must start with http:// or https://)")]
    Malformed,
}

impl ValidationError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::Empty => "E_INPUT_EMPTY",
            ValidationError::Malformed => "E_INPUT_MALFORMED",
        }
    }
}
