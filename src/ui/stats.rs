//! Visit statistics panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::helpers::truncate_to_width;
use super::theme::{COLOR_ACCENT, COLOR_DIM};
use crate::view_state::AppViewState;

const LABEL_WIDTH: usize = 14;

fn row(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("{:<width$}", label, width = LABEL_WIDTH),
            Style::default().fg(COLOR_DIM),
        ),
        Span::styled(value, Style::default().fg(COLOR_ACCENT)),
    ])
}

pub fn render_stats(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let value_width = (area.width as usize).saturating_sub(LABEL_WIDTH);

    let mut lines = match &view.surface.stats {
        Some(stats) => vec![
            row(
                "Original URL",
                truncate_to_width(&stats.original_url, value_width),
            ),
            Line::from(vec![
                Span::styled(
                    format!("{:<width$}", "Visits", width = LABEL_WIDTH),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::styled(
                    stats.visits.clone(),
                    Style::default()
                        .fg(COLOR_ACCENT)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            row("Created", stats.created_at.clone()),
        ],
        None => vec![Line::from(Span::styled(
            "No statistics loaded.",
            Style::default().fg(COLOR_DIM),
        ))],
    };

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("[b]", Style::default().fg(COLOR_ACCENT)),
        Span::raw(" Back"),
    ]));

    frame.render_widget(Paragraph::new(lines), area);
}
