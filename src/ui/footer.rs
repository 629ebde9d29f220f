//! Key hints for the visible panel.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::key_hint;
use super::theme::COLOR_DIM;
use crate::view_state::{SurfaceState, ViewState};

/// Hint spans for the current state.
pub fn footer_hints(state: &SurfaceState) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if state.loading {
        spans.push(Span::styled("Working…  ", Style::default().fg(COLOR_DIM)));
    } else {
        match state.view {
            ViewState::Form => {
                spans.extend(key_hint("Enter", "shorten"));
                spans.extend(key_hint("Esc", "clear/quit"));
            }
            ViewState::Result => {
                spans.extend(key_hint("c", "copy"));
                spans.extend(key_hint("s", "stats"));
                spans.extend(key_hint("n", "new URL"));
            }
            ViewState::Stats => {
                spans.extend(key_hint("b", "back"));
            }
        }
    }
    spans.extend(key_hint("Ctrl+C", "quit"));
    spans
}

pub fn render_footer(frame: &mut Frame, area: Rect, state: &SurfaceState) {
    frame.render_widget(Paragraph::new(Line::from(footer_hints(state))), area);
}
