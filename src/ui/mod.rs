//! UI rendering.
//!
//! One frame is a header line, the panel for the current [`ViewState`]
//! inside a rounded block, the banner line and the key hints. Everything
//! is drawn from an [`AppViewState`]; nothing here touches the client.

mod banner;
mod footer;
mod form;
mod header;
mod helpers;
mod result;
mod stats;
mod theme;

pub use banner::banner_line;
pub use footer::footer_hints;
pub use helpers::{spinner_frame, truncate_to_width, SPINNER_FRAMES};
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_INFO, COLOR_LINK,
    COLOR_PENDING, COLOR_SUCCESS,
};

use ratatui::{
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, BorderType, Borders},
    Frame,
};

use crate::view_state::{AppViewState, ViewState};
use banner::render_banner;
use footer::render_footer;
use form::render_form;
use header::render_header;
use helpers::{centered_width, inner_rect};
use result::render_result;
use stats::render_stats;

/// Widest the main panel gets on large terminals.
pub const MAX_PANEL_WIDTH: u16 = 80;

/// Height of the main panel including its border.
pub const PANEL_HEIGHT: u16 = 10;

/// Render one frame.
pub fn render(frame: &mut Frame, view: &AppViewState) {
    let area = centered_width(frame.area(), MAX_PANEL_WIDTH);
    let [header_area, _, panel_area, banner_area, _, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(PANEL_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    render_header(frame, header_area, view);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(view.surface.view.title());
    let content = inner_rect(block.inner(panel_area), 1);
    frame.render_widget(block, panel_area);

    match view.surface.view {
        ViewState::Form => render_form(frame, content, view),
        ViewState::Result => render_result(frame, content, view),
        ViewState::Stats => render_stats(frame, content, view),
    }

    render_banner(frame, banner_area, view.surface.banner.as_ref());
    render_footer(frame, footer_area, view.surface);
}
