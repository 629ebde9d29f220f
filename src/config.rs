//! Client configuration.
//!
//! Defaults point at a locally running service. Environment variables
//! override the defaults and command-line flags override both.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `SHORTY_BASE_URL` | `http://localhost:8000` |
//! | `SHORTY_API_PREFIX` | empty |
//! | `SHORTY_TIMEOUT_SECS` | `10` |
//! | `SHORTY_LOG` | `info` |

use std::time::Duration;

use url::Url;

use crate::error::ShortyError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// How long the copy confirmation and info banners stay up.
pub const FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Settings for talking to the shortener service.
///
/// # Example
///
/// ```ignore
/// use shorty::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_base_url("https://sho.rt")
///     .with_api_prefix("/api/v1");
/// assert_eq!(config.shorten_endpoint(), "https://sho.rt/api/v1/shorten");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Service origin without a trailing slash
    pub base_url: String,
    /// Path the API is mounted under, either empty or `/segment[/segment]`
    pub api_prefix: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// Copy confirmation / info banner lifetime
    pub feedback_duration: Duration,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_prefix: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            feedback_duration: FEEDBACK_DURATION,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the service origin. A trailing `/` is removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim().trim_end_matches('/').to_string();
        self
    }

    /// Set the API mount path, e.g. `api/v1/` becomes `/api/v1`.
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        let trimmed = prefix.trim().trim_matches('/');
        self.api_prefix = if trimmed.is_empty() {
            String::new()
        } else {
            format!("/{}", trimmed)
        };
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_feedback_duration(mut self, duration: Duration) -> Self {
        self.feedback_duration = duration;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Build a config from `SHORTY_*` environment variables.
    ///
    /// An unparsable `SHORTY_TIMEOUT_SECS` keeps the default and logs a
    /// warning.
    pub fn from_env() -> Self {
        let (config, warnings) = Self::from_env_with_warnings();
        for warning in &warnings {
            tracing::warn!("{}", warning);
        }
        config
    }

    /// Like [`ClientConfig::from_env`], but hands back the warnings instead
    /// of logging them, for callers that read the environment before
    /// logging is set up.
    pub fn from_env_with_warnings() -> (Self, Vec<String>) {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Ok(base_url) = std::env::var("SHORTY_BASE_URL") {
            config = config.with_base_url(base_url);
        }
        if let Ok(prefix) = std::env::var("SHORTY_API_PREFIX") {
            config = config.with_api_prefix(prefix);
        }
        if let Ok(raw) = std::env::var("SHORTY_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => config = config.with_timeout(Duration::from_secs(secs)),
                _ => warnings.push(format!("Ignoring invalid SHORTY_TIMEOUT_SECS={:?}", raw)),
            }
        }
        if let Ok(filter) = std::env::var("SHORTY_LOG") {
            config = config.with_log_filter(filter);
        }

        (config, warnings)
    }

    /// Check that the base URL is an absolute http(s) origin.
    pub fn validate(&self) -> Result<(), ShortyError> {
        let parsed = Url::parse(&self.base_url).map_err(|e| {
            ShortyError::Config(format!("invalid base URL {:?}: {}", self.base_url, e))
        })?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ShortyError::Config(format!(
                    "base URL must use http or https, got {:?}",
                    other
                )))
            }
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ShortyError::Config(format!(
                "base URL must not carry a query or fragment: {:?}",
                self.base_url
            )));
        }
        if self.timeout.is_zero() {
            return Err(ShortyError::Config("timeout must be greater than zero".to_string()));
        }
        Ok(())
    }

    /// `POST` target for link creation.
    pub fn shorten_endpoint(&self) -> String {
        format!("{}{}/shorten", self.base_url, self.api_prefix)
    }

    /// `GET` target for the stats of `short_code`. The code is
    /// percent-encoded as a single path segment.
    pub fn stats_endpoint(&self, short_code: &str) -> String {
        format!(
            "{}{}/stats/{}",
            self.base_url,
            self.api_prefix,
            urlencoding::encode(short_code)
        )
    }
}
