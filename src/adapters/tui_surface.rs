//! Surface adapter backing the terminal UI.
//!
//! The client writes through [`Surface`]; the event loop reads a snapshot
//! each frame and edits the input buffer directly on key presses. A dirty
//! flag tells the loop when a redraw is needed.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::traits::Surface;
use crate::view_state::{Banner, InputField, StatsDisplay, SurfaceState, ViewState};

#[derive(Debug, Clone)]
pub struct TuiSurface {
    state: Arc<Mutex<SurfaceState>>,
    dirty: Arc<AtomicBool>,
}

impl TuiSurface {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SurfaceState::new())),
            dirty: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Copy of the current state for rendering.
    pub fn snapshot(&self) -> SurfaceState {
        self.lock().clone()
    }

    /// Returns true once per batch of changes.
    pub fn take_dirty(&self) -> bool {
        self.dirty.swap(false, Ordering::AcqRel)
    }

    pub fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::Release);
    }

    /// Current input text.
    pub fn input_text(&self) -> String {
        self.lock().input.text().to_string()
    }

    /// Apply a key-driven edit to the input buffer.
    pub fn edit_input<F: FnOnce(&mut InputField)>(&self, edit: F) {
        edit(&mut self.lock().input);
        self.mark_dirty();
    }

    /// Expire timed feedback. Marks dirty when something disappeared.
    pub fn expire(&self, now: Instant) {
        if self.lock().expire(now) {
            self.mark_dirty();
        }
    }

    fn lock(&self) -> MutexGuard<'_, SurfaceState> {
        // A panic while holding the lock leaves plain data behind; keep using it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn update<F: FnOnce(&mut SurfaceState)>(&self, f: F) {
        f(&mut self.lock());
        self.mark_dirty();
    }
}

impl Default for TuiSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for TuiSurface {
    fn set_loading(&self, loading: bool) {
        self.update(|s| s.loading = loading);
    }

    fn show_view(&self, view: ViewState) {
        self.update(|s| {
            s.view = view;
            s.input_focused = view == ViewState::Form;
        });
    }

    fn clear_input(&self) {
        self.update(|s| s.input.clear());
    }

    fn focus_input(&self) {
        self.update(|s| s.input_focused = true);
    }

    fn show_short_url(&self, short_url: &str) {
        self.update(|s| {
            s.short_url = Some(short_url.to_string());
            s.copy_confirmed_until = None;
        });
    }

    fn show_stats(&self, stats: &StatsDisplay) {
        self.update(|s| s.stats = Some(stats.clone()));
    }

    fn confirm_copy(&self, duration: Duration) {
        self.update(|s| s.copy_confirmed_until = Some(Instant::now() + duration));
    }

    fn show_banner(&self, banner: Banner) {
        self.update(|s| s.banner = Some(banner));
    }

    fn hide_banner(&self) {
        self.update(|s| s.banner = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_mark_dirty() {
        let surface = TuiSurface::new();
        assert!(surface.take_dirty());
        assert!(!surface.take_dirty());

        surface.set_loading(true);
        assert!(surface.take_dirty());
        assert!(surface.snapshot().loading);
    }

    #[test]
    fn test_show_view_moves_focus() {
        let surface = TuiSurface::new();
        surface.show_view(ViewState::Result);
        assert!(!surface.snapshot().input_focused);
        surface.show_view(ViewState::Form);
        assert!(surface.snapshot().input_focused);
    }

    #[test]
    fn test_edit_input() {
        let surface = TuiSurface::new();
        surface.edit_input(|input| input.insert_str("https://example.com"));
        assert_eq!(surface.input_text(), "https://example.com");
        surface.clear_input();
        assert_eq!(surface.input_text(), "");
    }

    #[test]
    fn test_expire_marks_dirty_only_on_change() {
        let surface = TuiSurface::new();
        surface.show_banner(Banner::info("Copied to clipboard!", Duration::from_millis(0)));
        surface.take_dirty();

        surface.expire(Instant::now() + Duration::from_millis(1));
        assert!(surface.take_dirty());
        assert!(surface.snapshot().banner.is_none());

        surface.expire(Instant::now());
        assert!(!surface.take_dirty());
    }
}
