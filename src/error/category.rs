//! Error category classification.

use std::fmt;

/// High-level categorization of errors, used for log fields and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Transport failures: connection refused, DNS, timeout.
    Network,

    /// The service answered with a non-2xx status or a malformed body.
    Server,

    /// Input the user can fix (empty or malformed URL).
    User,

    /// Local environment problems such as clipboard access.
    System,

    /// Invalid settings (bad base URL, unparsable timeout).
    Configuration,
}

impl ErrorCategory {
    /// Returns a short label for the category suitable for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "network",
            ErrorCategory::Server => "server",
            ErrorCategory::User => "user",
            ErrorCategory::System => "system",
            ErrorCategory::Configuration => "configuration",
        }
    }

    /// Returns a suggested next step for this category.
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            ErrorCategory::Network => "Check that the shortener service is running and reachable",
            ErrorCategory::Server => "The service rejected the request; check the message above",
            ErrorCategory::User => "Please check your input and try again",
            ErrorCategory::System => "Select and copy the short URL manually",
            ErrorCategory::Configuration => "Check --base-url and the SHORTY_* environment variables",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
