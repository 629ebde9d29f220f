//! AppMessage enum for async communication within the application.

use super::Action;

/// Messages sent back to the event loop by spawned client commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// A command finished. `error` holds the banner text on failure.
    ActionFinished {
        action: Action,
        error: Option<String>,
    },
}
