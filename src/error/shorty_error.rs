//! Unified error type.

use thiserror::Error;

use super::{ErrorCategory, RequestError, ValidationError};
use crate::traits::ClipboardError;

/// Any failure a user action can end in.
#[derive(Debug, Clone, Error)]
pub enum ShortyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ShortyError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ShortyError::Validation(_) => ErrorCategory::User,
            ShortyError::Request(RequestError::Transport { .. }) => ErrorCategory::Network,
            ShortyError::Request(_) => ErrorCategory::Server,
            ShortyError::Clipboard(_) => ErrorCategory::System,
            ShortyError::Config(_) => ErrorCategory::Configuration,
        }
    }

    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            ShortyError::Validation(err) => err.to_string(),
            ShortyError::Request(err) => err.user_message(),
            ShortyError::Clipboard(_) => {
                "Could not copy to clipboard. Select the link and copy it manually.".to_string()
            }
            ShortyError::Config(msg) => msg.clone(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ShortyError::Validation(err) => err.error_code(),
            ShortyError::Request(err) => err.error_code(),
            ShortyError::Clipboard(_) => "E_CLIPBOARD",
            ShortyError::Config(_) => "E_CONFIG",
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ShortyError::Validation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiOperation;
    use crate::traits::HttpError;

    #[test]
    fn test_categories() {
        let err: ShortyError = ValidationError::Empty.into();
        assert_eq!(err.category(), ErrorCategory::User);
        assert!(err.is_validation());

        let err: ShortyError = RequestError::Transport {
            operation: ApiOperation::Shorten,
            source: HttpError::Timeout("10s".to_string()),
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Network);

        let err: ShortyError = RequestError::Rejected {
            operation: ApiOperation::Stats,
            status: 404,
            detail: None,
        }
        .into();
        assert_eq!(err.category(), ErrorCategory::Server);

        let err: ShortyError = ClipboardError::Empty.into();
        assert_eq!(err.category(), ErrorCategory::System);
    }

    #[test]
    fn test_user_messages() {
        let err: ShortyError = ValidationError::Malformed.into();
        assert!(err.user_message().starts_with("Please enter a valid URL"));

        let err: ShortyError = RequestError::Rejected {
            operation: ApiOperation::Shorten,
            status: 400,
            detail: Some("URL too long".to_string()),
        }
        .into();
        assert_eq!(err.user_message(), "URL too long");
        assert_eq!(err.error_code(), "E_API_REJECTED");

        let err = ShortyError::Config("bad base url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad base url");
    }
}
