//! Error / info banner line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_ERROR, COLOR_INFO};
use crate::view_state::{Banner, BannerKind};

pub fn banner_line(banner: &Banner) -> Line<'static> {
    let (icon, color) = match banner.kind {
        BannerKind::Error => ("✗", COLOR_ERROR),
        BannerKind::Info => ("ℹ", COLOR_INFO),
    };
    Line::from(vec![
        Span::styled(
            format!("{} ", icon),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(banner.message.clone(), Style::default().fg(color)),
    ])
}

pub fn render_banner(frame: &mut Frame, area: Rect, banner: Option<&Banner>) {
    if let Some(banner) = banner {
        frame.render_widget(Paragraph::new(banner_line(banner)), area);
    }
}
