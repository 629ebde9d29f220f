//! Running client commands from the event loop.
//!
//! Commands reach the client through `try_lock_owned` on its async mutex.
//! A command that finds the mutex held is dropped: one request at a time,
//! and no reset/back/copy while a request is in flight.

use std::sync::Arc;

use tracing::{debug, warn};

use super::{App, AppMessage};
use crate::error::ShortyResult;

/// A user-triggered client command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit(String),
    FetchStats,
    Reset,
    BackToResult,
    Copy,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Submit(_) => "submit",
            Action::FetchStats => "fetch_stats",
            Action::Reset => "reset",
            Action::BackToResult => "back_to_result",
            Action::Copy => "copy",
        }
    }
}

fn finished<T>(action: Action, result: &ShortyResult<T>) -> AppMessage {
    AppMessage::ActionFinished {
        action,
        error: result.as_ref().err().map(|e| e.user_message()),
    }
}

impl App {
    /// Run `action` against the client.
    ///
    /// Returns false when it was rejected because another command holds
    /// the client.
    pub fn dispatch(&mut self, action: Action) -> bool {
        let mut client = match Arc::clone(&self.client).try_lock_owned() {
            Ok(client) => client,
            Err(_) => {
                warn!("Ignoring {}: a request is still pending", action.name());
                return false;
            }
        };

        debug!("Dispatching {}", action.name());
        self.mark_dirty();

        match action {
            Action::Reset => {
                client.reset();
                self.handle_message(finished::<()>(Action::Reset, &Ok(())));
            }
            Action::BackToResult => {
                client.back_to_result();
                self.handle_message(finished::<()>(Action::BackToResult, &Ok(())));
            }
            Action::Copy => {
                let result = client.copy_short_url();
                self.handle_message(finished(Action::Copy, &result));
            }
            Action::Submit(raw) => {
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = client.submit(&raw).await;
                    drop(client);
                    let _ = tx.send(finished(Action::Submit(raw), &result));
                });
            }
            Action::FetchStats => {
                let tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = client.fetch_stats().await;
                    drop(client);
                    let _ = tx.send(finished(Action::FetchStats, &result));
                });
            }
        }
        true
    }

    /// True while a spawned command holds the client.
    pub fn is_busy(&self) -> bool {
        self.client.try_lock().is_err()
    }
}
