//! Shared screen state written by the client and read by the renderer.

use std::time::Instant;

use super::{Banner, InputField, StatsDisplay, ViewState};

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, Default)]
pub struct SurfaceState {
    pub view: ViewState,
    pub loading: bool,
    pub input: InputField,
    pub input_focused: bool,
    pub short_url: Option<String>,
    pub stats: Option<StatsDisplay>,
    /// Copy control shows its confirmation until this instant
    pub copy_confirmed_until: Option<Instant>,
    pub banner: Option<Banner>,
}

impl SurfaceState {
    pub fn new() -> Self {
        Self {
            input_focused: true,
            ..Default::default()
        }
    }

    pub fn copy_confirmed(&self, now: Instant) -> bool {
        self.copy_confirmed_until.is_some_and(|until| now < until)
    }

    /// Drop the copy confirmation and banner once their time is up.
    ///
    /// Returns true when something visible changed.
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut changed = false;
        if self.copy_confirmed_until.is_some_and(|until| now >= until) {
            self.copy_confirmed_until = None;
            changed = true;
        }
        if self.banner.as_ref().is_some_and(|b| b.is_expired(now)) {
            self.banner = None;
            changed = true;
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_new_focuses_input_on_form() {
        let state = SurfaceState::new();
        assert_eq!(state.view, ViewState::Form);
        assert!(state.input_focused);
        assert!(!state.loading);
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_expire_clears_copy_confirmation_and_info_banner() {
        let mut state = SurfaceState::new();
        let now = Instant::now();
        state.copy_confirmed_until = Some(now + Duration::from_secs(2));
        state.banner = Some(Banner::info("Copied to clipboard!", Duration::from_secs(2)));

        assert!(state.copy_confirmed(now));
        assert!(!state.expire(now));

        let later = now + Duration::from_secs(3);
        assert!(state.expire(later));
        assert!(!state.copy_confirmed(later));
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_expire_keeps_error_banner() {
        let mut state = SurfaceState::new();
        state.banner = Some(Banner::error("URL too long"));
        assert!(!state.expire(Instant::now() + Duration::from_secs(60)));
        assert!(state.banner.is_some());
    }
}
