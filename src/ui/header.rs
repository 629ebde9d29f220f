//! Title line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_HEADER};
use crate::view_state::AppViewState;

pub fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let line = Line::from(vec![
        Span::styled(
            "shorty",
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" · ", Style::default().fg(COLOR_DIM)),
        Span::styled(view.surface.view.title().trim(), Style::default().fg(COLOR_HEADER)),
        Span::styled(format!("  {}", view.base_url), Style::default().fg(COLOR_DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
