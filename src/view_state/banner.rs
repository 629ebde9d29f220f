//! Error and info banner.

use std::time::{Duration, Instant};

/// Which channel a banner belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// A failed action
    Error,
    /// Neutral feedback, e.g. a fallback copy that worked
    Info,
}

/// A single banner message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: String,
    /// When set, the banner hides itself at this instant
    pub expires_at: Option<Instant>,
}

impl Banner {
    /// An error banner that stays until the next user action.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            message: message.into(),
            expires_at: None,
        }
    }

    /// An info banner that hides itself after `ttl`.
    pub fn info(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: BannerKind::Info,
            message: message.into(),
            expires_at: Some(Instant::now() + ttl),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == BannerKind::Error
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}
