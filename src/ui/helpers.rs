//! Small rendering helpers shared by the panels.

use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::Span,
};

use super::theme::{COLOR_ACCENT, COLOR_DIM};

/// Spinner frames for the loading indicator
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Spinner frame for a tick count.
pub fn spinner_frame(tick_count: u64) -> &'static str {
    SPINNER_FRAMES[(tick_count % SPINNER_FRAMES.len() as u64) as usize]
}

/// Get inner rect with margin
pub fn inner_rect(area: Rect, margin: u16) -> Rect {
    Rect {
        x: area.x + margin,
        y: area.y + margin,
        width: area.width.saturating_sub(margin * 2),
        height: area.height.saturating_sub(margin * 2),
    }
}

/// A rect of at most `width` columns centered horizontally in `area`.
pub fn centered_width(area: Rect, width: u16) -> Rect {
    let [center] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    center
}

/// `[key] label` pair for hint lines.
pub fn key_hint(key: &'static str, label: &'static str) -> Vec<Span<'static>> {
    vec![
        Span::styled(key, Style::default().fg(COLOR_ACCENT)),
        Span::styled(format!(" {}  ", label), Style::default().fg(COLOR_DIM)),
    ]
}

/// Shorten `text` to `max` columns, ending with `…` when cut.
pub fn truncate_to_width(text: &str, max: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if text.width() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_frame_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(10), "⠋");
        assert_eq!(spinner_frame(3), "⠸");
    }

    #[test]
    fn test_inner_rect() {
        let r = inner_rect(Rect::new(0, 0, 10, 6), 1);
        assert_eq!(r, Rect::new(1, 1, 8, 4));
        let r = inner_rect(Rect::new(0, 0, 1, 1), 1);
        assert_eq!(r.width, 0);
    }

    #[test]
    fn test_centered_width() {
        let r = centered_width(Rect::new(0, 0, 100, 5), 60);
        assert_eq!(r.width, 60);
        assert_eq!(r.x, 20);
        let r = centered_width(Rect::new(0, 0, 40, 5), 60);
        assert_eq!(r.width, 40);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("https://example.com/long", 10), "https://e…");
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
