//! Display surface abstraction.
//!
//! The shortener client never touches widgets directly. It pushes state
//! changes through this trait; the TUI adapter stores them for the renderer
//! and the recording mock keeps them for assertions.

use std::time::Duration;

use crate::view_state::{Banner, StatsDisplay, ViewState};

/// Everything the client can change on screen.
///
/// Methods take `&self`; implementations use interior mutability so the
/// surface can be shared between the client and the render loop.
pub trait Surface: Send + Sync {
    /// Toggle the submit control between its idle and loading sub-states.
    fn set_loading(&self, loading: bool);

    /// Make `view` the visible panel.
    fn show_view(&self, view: ViewState);

    /// Empty the URL input field.
    fn clear_input(&self);

    /// Move keyboard focus to the URL input field.
    fn focus_input(&self);

    /// Display the short URL in the result panel.
    fn show_short_url(&self, short_url: &str);

    /// Fill the stats panel.
    fn show_stats(&self, stats: &StatsDisplay);

    /// Flip the copy control to its confirmation state for `duration`.
    fn confirm_copy(&self, duration: Duration);

    /// Show a banner, replacing any banner already visible.
    fn show_banner(&self, banner: Banner);

    /// Hide the banner if one is visible.
    fn hide_banner(&self);
}
