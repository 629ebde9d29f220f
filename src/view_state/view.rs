//! Which panel is on screen.

/// The three mutually exclusive panels. The banner is not part of this
/// state; it overlays whichever panel is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// URL entry form (initial state)
    #[default]
    Form,
    /// Short URL result with copy/stats/new actions
    Result,
    /// Visit statistics for the current short code
    Stats,
}

impl ViewState {
    /// Panel title shown in the block border.
    pub fn title(&self) -> &'static str {
        match self {
            ViewState::Form => " Shorten a URL ",
            ViewState::Result => " Your short link ",
            ViewState::Stats => " Link statistics ",
        }
    }
}
