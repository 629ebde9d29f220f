//! Loading indicator guard.

use crate::traits::Surface;

/// Turns the surface's loading indicator on when created and off when
/// dropped, whichever way the enclosing scope exits.
pub struct LoadingGuard<'a> {
    surface: &'a dyn Surface,
}

impl<'a> LoadingGuard<'a> {
    pub fn new(surface: &'a dyn Surface) -> Self {
        surface.set_loading(true);
        Self { surface }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.surface.set_loading(false);
    }
}
