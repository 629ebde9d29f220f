//! The shortener client: session state plus the user-facing commands.
//!
//! [`ShortenerClient`] owns the only state that survives across views (the
//! current short code) and drives an injected [`Surface`]. Every command
//! clears a stale banner first and turns its own failure into a banner
//! message before returning it.
//!
//! Commands take `&mut self`, so a caller can never run two of them at once
//! against the same session. The TUI keeps the client behind an async mutex
//! and drops key presses while a request holds it.

mod loading;

pub use loading::LoadingGuard;

use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use crate::api::ShortenerApi;
use crate::config::ClientConfig;
use crate::error::{ShortyError, ShortyResult};
use crate::models::{LinkStats, ShortLinkResult};
use crate::traits::{ClipboardBackend, Surface};
use crate::validate::validate_url;
use crate::view_state::{Banner, StatsDisplay, ViewState};

/// Info banner text when the fallback copy path was used.
pub const FALLBACK_COPY_MESSAGE: &str = "Copied to clipboard!";

/// Which mechanism ended up holding the copied text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The system clipboard accepted the text
    Clipboard,
    /// The system clipboard failed and the fallback was used
    Fallback,
}

pub struct ShortenerClient {
    api: ShortenerApi,
    surface: Arc<dyn Surface>,
    clipboard: Arc<dyn ClipboardBackend>,
    fallback_clipboard: Arc<dyn ClipboardBackend>,
    feedback_duration: Duration,
    short_code: Option<String>,
    short_url: Option<String>,
    view: ViewState,
}

impl ShortenerClient {
    pub fn new(
        api: ShortenerApi,
        surface: Arc<dyn Surface>,
        clipboard: Arc<dyn ClipboardBackend>,
        fallback_clipboard: Arc<dyn ClipboardBackend>,
    ) -> Self {
        let feedback_duration = api.config().feedback_duration;
        Self {
            api,
            surface,
            clipboard,
            fallback_clipboard,
            feedback_duration,
            short_code: None,
            short_url: None,
            view: ViewState::Form,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.api.config()
    }

    /// Short code from the last successful submit, if the session holds one.
    pub fn short_code(&self) -> Option<&str> {
        self.short_code.as_deref()
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn view(&self) -> ViewState {
        self.view
    }

    /// Validate `raw_url` and create a short link for it.
    ///
    /// On success the session holds the new short code, the input is
    /// cleared and the result panel is shown. On failure the view is left
    /// alone and the banner carries the error message.
    pub async fn submit(&mut self, raw_url: &str) -> ShortyResult<ShortLinkResult> {
        self.surface.hide_banner();

        let url = match validate_url(raw_url) {
            Ok(url) => url,
            Err(err) => return Err(self.fail(err.into())),
        };

        let outcome = {
            let _loading = LoadingGuard::new(self.surface.as_ref());
            self.api.create_short_link(&url).await
        };

        match outcome {
            Ok(result) => {
                tracing::info!("Created short code {} for {}", result.short_code, url);
                self.short_code = Some(result.short_code.clone());
                self.short_url = Some(result.short_url.clone());
                self.surface.show_short_url(&result.short_url);
                self.surface.clear_input();
                self.set_view(ViewState::Result);
                Ok(result)
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Fetch and show stats for the current short code.
    ///
    /// Without a short code this does nothing and returns `Ok(None)`.
    pub async fn fetch_stats(&mut self) -> ShortyResult<Option<LinkStats>> {
        let Some(code) = self.short_code.clone() else {
            tracing::debug!("fetch_stats ignored: no short code held");
            return Ok(None);
        };

        self.surface.hide_banner();

        let outcome = {
            let _loading = LoadingGuard::new(self.surface.as_ref());
            self.api.link_stats(&code).await
        };

        match outcome {
            Ok(stats) => {
                tracing::info!("Fetched stats for {}: {} visits", code, stats.visits_count);
                self.surface
                    .show_stats(&StatsDisplay::from_stats(&stats, &Local));
                self.set_view(ViewState::Stats);
                Ok(Some(stats))
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    /// Forget the current link and go back to an empty form.
    pub fn reset(&mut self) {
        self.short_code = None;
        self.short_url = None;
        self.surface.hide_banner();
        self.set_view(ViewState::Form);
        self.surface.focus_input();
    }

    /// Return from the stats panel to the result panel.
    ///
    /// Returns false, changing nothing, when no short code is held.
    pub fn back_to_result(&mut self) -> bool {
        if self.short_code.is_none() {
            tracing::debug!("back_to_result ignored: no short code held");
            return false;
        }
        self.surface.hide_banner();
        self.set_view(ViewState::Result);
        true
    }

    /// Copy the displayed short URL.
    ///
    /// Tries the system clipboard first and the fallback second. Returns
    /// `Ok(None)` when there is nothing to copy.
    pub fn copy_short_url(&mut self) -> ShortyResult<Option<CopyOutcome>> {
        self.surface.hide_banner();

        let Some(short_url) = self.short_url.clone() else {
            tracing::debug!("copy ignored: no short URL displayed");
            return Ok(None);
        };

        match self.clipboard.set_text(&short_url) {
            Ok(()) => {
                tracing::debug!("Copied via {}", self.clipboard.name());
                self.surface.confirm_copy(self.feedback_duration);
                return Ok(Some(CopyOutcome::Clipboard));
            }
            Err(err) => {
                tracing::warn!(
                    "{} clipboard failed ({}), trying {}",
                    self.clipboard.name(),
                    err,
                    self.fallback_clipboard.name()
                );
            }
        }

        match self.fallback_clipboard.set_text(&short_url) {
            Ok(()) => {
                self.surface
                    .show_banner(Banner::info(FALLBACK_COPY_MESSAGE, self.feedback_duration));
                Ok(Some(CopyOutcome::Fallback))
            }
            Err(err) => Err(self.fail(err.into())),
        }
    }

    fn set_view(&mut self, view: ViewState) {
        if self.view != view {
            tracing::debug!("View {:?} -> {:?}", self.view, view);
        }
        self.view = view;
        self.surface.show_view(view);
    }

    /// Put `err` in the error banner and hand it back.
    fn fail(&self, err: ShortyError) -> ShortyError {
        tracing::warn!("{} [{}]", err, err.error_code());
        self.surface.show_banner(Banner::error(err.user_message()));
        err
    }
}
