//! Errors from talking to the shortener service.

use thiserror::Error;

use crate::traits::HttpError;

/// Shown when the transport fails before any response arrives.
pub const GENERIC_FAILURE: &str = "An error occurred. Please try again.";

/// Which API call failed; selects the fallback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiOperation {
    Shorten,
    Stats,
}

impl ApiOperation {
    /// Message used when the service gives no usable `detail`.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            ApiOperation::Shorten => "Failed to shorten URL",
            ApiOperation::Stats => "Failed to fetch stats",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ApiOperation::Shorten => "shorten",
            ApiOperation::Stats => "stats",
        }
    }
}

/// A create or stats request that did not produce a usable result.
#[derive(Debug, Clone, Error)]
pub enum RequestError {
    /// Non-2xx status
    #[error("{operation:?} rejected ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Rejected {
        operation: ApiOperation,
        status: u16,
        detail: Option<String>,
    },

    /// No response at all
    #[error("{operation:?} transport failure: {source}")]
    Transport {
        operation: ApiOperation,
        #[source]
        source: HttpError,
    },

    /// 2xx status with a body that does not match the schema
    #[error("{operation:?} invalid response: {message}")]
    InvalidResponse {
        operation: ApiOperation,
        message: String,
    },
}

impl RequestError {
    pub fn operation(&self) -> ApiOperation {
        match self {
            RequestError::Rejected { operation, .. }
            | RequestError::Transport { operation, .. }
            | RequestError::InvalidResponse { operation, .. } => *operation,
        }
    }

    /// HTTP status, when the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Banner text: the service's own `detail` when present.
    pub fn user_message(&self) -> String {
        match self {
            RequestError::Rejected {
                operation, detail, ..
            } => detail
                .clone()
                .unwrap_or_else(|| operation.fallback_message().to_string()),
            RequestError::Transport { .. } => GENERIC_FAILURE.to_string(),
            RequestError::InvalidResponse { operation, .. } => {
                operation.fallback_message().to_string()
            }
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::Rejected { .. } => "E_API_REJECTED",
            RequestError::Transport { .. } => "E_API_TRANSPORT",
            RequestError::InvalidResponse { .. } => "E_API_INVALID",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_uses_detail() {
        let err = RequestError::Rejected {
            operation: ApiOperation::Shorten,
            status: 400,
            detail: Some("URL too long".to_string()),
        };
        assert_eq!(err.user_message(), "URL too long");
        assert_eq!(err.status(), Some(400));
        assert_eq!(err.operation(), ApiOperation::Shorten);
    }

    #[test]
    fn test_rejected_without_detail_falls_back() {
        let err = RequestError::Rejected {
            operation: ApiOperation::Stats,
            status: 500,
            detail: None,
        };
        assert_eq!(err.user_message(), "Failed to fetch stats");
    }

    #[test]
    fn test_transport_is_generic() {
        let err = RequestError::Transport {
            operation: ApiOperation::Shorten,
            source: HttpError::ConnectionFailed("refused".to_string()),
        };
        assert_eq!(err.user_message(), GENERIC_FAILURE);
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_invalid_response_uses_operation_fallback() {
        let err = RequestError::InvalidResponse {
            operation: ApiOperation::Shorten,
            message: "missing field `short_url`".to_string(),
        };
        assert_eq!(err.user_message(), "Failed to shorten URL");
        assert_eq!(err.error_code(), "E_API_INVALID");
    }
}
