//! Application state for the terminal front end.
//!
//! [`App`] owns the [`TuiSurface`] the renderer reads and a handle to the
//! [`ShortenerClient`] behind an async mutex. Key presses become input
//! edits or [`Action`]s; network actions run in spawned tasks that report
//! back through [`AppMessage`].

mod actions;
mod handlers;
mod messages;

pub use actions::Action;
pub use messages::AppMessage;

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::adapters::TuiSurface;
use crate::client::ShortenerClient;
use crate::view_state::{AppViewState, SurfaceState};

pub struct App {
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Tick counter for the spinner
    pub tick_count: u64,
    /// Set when something outside the surface changed
    pub needs_redraw: bool,
    /// Receiver for async messages; the event loop takes it
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender cloned into spawned commands
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    surface: TuiSurface,
    client: Arc<Mutex<ShortenerClient>>,
    base_url: String,
}

impl App {
    /// `surface` must be the same one `client` was built with.
    pub fn new(client: ShortenerClient, surface: TuiSurface) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let config = client.config();
        let base_url = format!("{}{}", config.base_url, config.api_prefix);
        Self {
            should_quit: false,
            tick_count: 0,
            needs_redraw: true,
            message_rx: Some(message_rx),
            message_tx,
            surface,
            client: Arc::new(Mutex::new(client)),
            base_url,
        }
    }

    pub fn surface(&self) -> &TuiSurface {
        &self.surface
    }

    pub fn client(&self) -> Arc<Mutex<ShortenerClient>> {
        Arc::clone(&self.client)
    }

    pub fn quit(&mut self) {
        info!("Quit requested");
        self.should_quit = true;
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    /// Whether a redraw is due, clearing the flags.
    pub fn take_redraw(&mut self) -> bool {
        let surface_dirty = self.surface.take_dirty();
        let due = self.needs_redraw || surface_dirty;
        self.needs_redraw = false;
        due
    }

    /// Advance the spinner and expire timed feedback.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        self.surface.expire(Instant::now());
        if self.is_busy() {
            self.mark_dirty();
        }
    }

    pub fn handle_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::ActionFinished { action, error } => match error {
                None => debug!("{} finished", action.name()),
                Some(error) => warn!("{} failed: {}", action.name(), error),
            },
        }
        self.mark_dirty();
    }

    /// Rendering input borrowed from `snapshot`.
    pub fn view_state<'a>(&'a self, snapshot: &'a SurfaceState) -> AppViewState<'a> {
        AppViewState {
            surface: snapshot,
            tick_count: self.tick_count,
            base_url: &self.base_url,
            copy_confirmed: snapshot.copy_confirmed(Instant::now()),
        }
    }
}
