//! Color theme constants.
//!
//! Minimal dark palette shared by every panel.

use ratatui::style::Color;

/// Panel borders
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused input
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Highlights and key names
pub const COLOR_ACCENT: Color = Color::White;

/// Title in the header
pub const COLOR_HEADER: Color = Color::White;

/// Less important text
pub const COLOR_DIM: Color = Color::DarkGray;

/// The short URL itself
pub const COLOR_LINK: Color = Color::Cyan;

/// Copy confirmation and other positive feedback
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117); // green #04B575

/// Spinner while a request is pending
pub const COLOR_PENDING: Color = Color::Yellow;

/// Error banner
pub const COLOR_ERROR: Color = Color::Red;

/// Info banner
pub const COLOR_INFO: Color = Color::Rgb(0, 122, 204); // blue #007ACC
