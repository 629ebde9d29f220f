//! URL entry panel.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::helpers::spinner_frame;
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_PENDING};
use crate::view_state::AppViewState;

const PLACEHOLDER: &str = "https://example.com/a/very/long/link";

/// Horizontal scroll that keeps the cursor inside a `width`-column box.
pub fn input_scroll(cursor_column: usize, width: u16) -> u16 {
    let width = width as usize;
    if width == 0 {
        return 0;
    }
    cursor_column.saturating_sub(width - 1) as u16
}

/// Submit control text: idle label, or spinner while loading.
pub fn submit_label(loading: bool, tick_count: u64) -> Line<'static> {
    if loading {
        Line::from(Span::styled(
            format!("{} Shortening…", spinner_frame(tick_count)),
            Style::default().fg(COLOR_PENDING),
        ))
    } else {
        Line::from(vec![
            Span::styled(
                "[Enter]",
                Style::default()
                    .fg(COLOR_ACCENT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Shorten"),
        ])
    }
}

pub fn render_form(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let state = view.surface;
    let [prompt_area, input_area, _, button_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Paste a long URL to get a short link.",
            Style::default().fg(COLOR_DIM),
        )),
        prompt_area,
    );

    let focused = state.input_focused && !state.loading;
    let border = if focused {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(" URL ");
    let inner = block.inner(input_area);
    frame.render_widget(block, input_area);

    if state.input.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(PLACEHOLDER, Style::default().fg(COLOR_DIM))),
            inner,
        );
    } else {
        let text_style = if state.loading {
            Style::default().fg(COLOR_DIM)
        } else {
            Style::default().fg(COLOR_ACCENT)
        };
        let scroll = input_scroll(state.input.cursor_column(), inner.width);
        frame.render_widget(
            Paragraph::new(Span::styled(state.input.text().to_string(), text_style))
                .scroll((0, scroll)),
            inner,
        );
    }

    if focused && inner.width > 0 {
        let scroll = input_scroll(state.input.cursor_column(), inner.width);
        let column = state.input.cursor_column() as u16 - scroll;
        frame.set_cursor_position(Position::new(inner.x + column, inner.y));
    }

    frame.render_widget(
        Paragraph::new(submit_label(state.loading, view.tick_count)),
        button_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_scroll() {
        assert_eq!(input_scroll(0, 20), 0);
        assert_eq!(input_scroll(19, 20), 0);
        assert_eq!(input_scroll(20, 20), 1);
        assert_eq!(input_scroll(45, 20), 26);
        assert_eq!(input_scroll(5, 0), 0);
    }

    #[test]
    fn test_submit_label_switches_to_spinner() {
        let idle: String = submit_label(false, 0)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(idle, "[Enter] Shorten");

        let busy: String = submit_label(true, 1)
            .spans
            .iter()
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(busy, "⠙ Shortening…");
    }
}
