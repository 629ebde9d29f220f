//! View-only data structures shared by the client and the UI.
//!
//! The client writes through [`crate::traits::Surface`]; the TUI adapter
//! stores those writes in a [`SurfaceState`] and the renderer draws from an
//! [`AppViewState`] built around it. UI code never sees the client.
//!
//! - [`ViewState`]: which panel is visible
//! - [`Banner`]: error or info overlay
//! - [`StatsDisplay`]: formatted stats fields
//! - [`InputField`]: the URL input buffer

mod banner;
mod input_field;
mod stats_display;
mod surface_state;
mod view;

pub use banner::{Banner, BannerKind};
pub use input_field::InputField;
pub use stats_display::StatsDisplay;
pub use surface_state::SurfaceState;
pub use view::ViewState;

/// Per-frame rendering input.
pub struct AppViewState<'a> {
    pub surface: &'a SurfaceState,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    /// Base URL of the service, shown in the header
    pub base_url: &'a str,
    /// Whether the copy control is currently in its confirmation state
    pub copy_confirmed: bool,
}
