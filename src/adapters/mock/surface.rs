//! Recording surface for testing.
//!
//! Keeps both the resulting screen state and the ordered list of calls, so
//! tests can check final state and sequencing (e.g. loading on before the
//! request, off after it).

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::traits::Surface;
use crate::view_state::{Banner, StatsDisplay, SurfaceState, ViewState};

/// One call made on the surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Loading(bool),
    View(ViewState),
    ClearInput,
    FocusInput,
    ShortUrl(String),
    Stats(StatsDisplay),
    CopyConfirmed,
    Banner(Banner),
    HideBanner,
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    state: Arc<Mutex<SurfaceState>>,
    events: Arc<Mutex<Vec<SurfaceEvent>>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SurfaceState::new())),
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn state(&self) -> SurfaceState {
        self.state.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear_events(&self) {
        self.events.lock().unwrap().clear();
    }

    pub fn view(&self) -> ViewState {
        self.state.lock().unwrap().view
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().unwrap().loading
    }

    pub fn banner(&self) -> Option<Banner> {
        self.state.lock().unwrap().banner.clone()
    }

    /// Pre-fill the input as if the user had typed it.
    pub fn type_input(&self, text: &str) {
        self.state.lock().unwrap().input.set_text(text);
    }

    fn record(&self, event: SurfaceEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl Surface for RecordingSurface {
    fn set_loading(&self, loading: bool) {
        self.state.lock().unwrap().loading = loading;
        self.record(SurfaceEvent::Loading(loading));
    }

    fn show_view(&self, view: ViewState) {
        self.state.lock().unwrap().view = view;
        self.record(SurfaceEvent::View(view));
    }

    fn clear_input(&self) {
        self.state.lock().unwrap().input.clear();
        self.record(SurfaceEvent::ClearInput);
    }

    fn focus_input(&self) {
        self.state.lock().unwrap().input_focused = true;
        self.record(SurfaceEvent::FocusInput);
    }

    fn show_short_url(&self, short_url: &str) {
        self.state.lock().unwrap().short_url = Some(short_url.to_string());
        self.record(SurfaceEvent::ShortUrl(short_url.to_string()));
    }

    fn show_stats(&self, stats: &StatsDisplay) {
        self.state.lock().unwrap().stats = Some(stats.clone());
        self.record(SurfaceEvent::Stats(stats.clone()));
    }

    fn confirm_copy(&self, duration: Duration) {
        self.state.lock().unwrap().copy_confirmed_until = Some(Instant::now() + duration);
        self.record(SurfaceEvent::CopyConfirmed);
    }

    fn show_banner(&self, banner: Banner) {
        self.state.lock().unwrap().banner = Some(banner.clone());
        self.record(SurfaceEvent::Banner(banner));
    }

    fn hide_banner(&self) {
        self.state.lock().unwrap().banner = None;
        self.record(SurfaceEvent::HideBanner);
    }
}
