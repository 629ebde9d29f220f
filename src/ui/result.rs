//! Short link panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::{spinner_frame, truncate_to_width};
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_LINK, COLOR_PENDING, COLOR_SUCCESS};
use crate::view_state::AppViewState;

/// Copy control text.
pub fn copy_label(confirmed: bool) -> Line<'static> {
    if confirmed {
        Line::from(Span::styled(
            "✓ Copied",
            Style::default()
                .fg(COLOR_SUCCESS)
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(vec![
            Span::styled("[c]", Style::default().fg(COLOR_ACCENT)),
            Span::raw(" Copy"),
        ])
    }
}

pub fn render_result(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let state = view.surface;
    let short_url = state.short_url.as_deref().unwrap_or("");

    let mut actions = copy_label(view.copy_confirmed).spans;
    actions.push(Span::raw("   "));
    if state.loading {
        actions.push(Span::styled(
            format!("{} Loading stats…", spinner_frame(view.tick_count)),
            Style::default().fg(COLOR_PENDING),
        ));
    } else {
        actions.push(Span::styled("[s]", Style::default().fg(COLOR_ACCENT)));
        actions.push(Span::raw(" View stats   "));
        actions.push(Span::styled("[n]", Style::default().fg(COLOR_ACCENT)));
        actions.push(Span::raw(" New URL"));
    }

    let lines = vec![
        Line::from(Span::styled(
            "Your short link is ready:",
            Style::default().fg(COLOR_DIM),
        )),
        Line::from(""),
        Line::from(Span::styled(
            truncate_to_width(short_url, area.width as usize),
            Style::default()
                .fg(COLOR_LINK)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )),
        Line::from(""),
        Line::from(actions),
    ];

    frame.render_widget(Paragraph::new(lines), area);
}
