//! Key and paste handling.
//!
//! Maps terminal input to input-buffer edits or [`Action`]s depending on
//! the visible panel. Nothing but Ctrl+C does anything while a request is
//! pending.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use super::{Action, App};
use crate::view_state::ViewState;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.is_busy() {
            debug!("Key {:?} ignored while a request is pending", key.code);
            return;
        }

        match self.surface.snapshot().view {
            ViewState::Form => self.handle_form_key(key),
            ViewState::Result => self.handle_result_key(key),
            ViewState::Stats => self.handle_stats_key(key),
        }
    }

    /// Bracketed paste lands in the URL input on the form.
    pub fn handle_paste(&mut self, text: &str) {
        if self.is_busy() || self.surface.snapshot().view != ViewState::Form {
            return;
        }
        self.surface.edit_input(|input| input.insert_str(text.trim()));
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Enter => {
                let raw = self.surface.input_text();
                self.dispatch(Action::Submit(raw));
            }
            KeyCode::Esc => {
                if self.surface.input_text().is_empty() {
                    self.quit();
                } else {
                    self.surface.edit_input(|input| input.clear());
                }
            }
            KeyCode::Char('u') if ctrl => self.surface.edit_input(|input| input.clear()),
            KeyCode::Char('a') if ctrl => self.surface.edit_input(|input| input.move_home()),
            KeyCode::Char('e') if ctrl => self.surface.edit_input(|input| input.move_end()),
            KeyCode::Char(c) if !ctrl => self.surface.edit_input(|input| input.insert_char(c)),
            KeyCode::Backspace => self.surface.edit_input(|input| input.backspace()),
            KeyCode::Delete => self.surface.edit_input(|input| input.delete()),
            KeyCode::Left => self.surface.edit_input(|input| input.move_left()),
            KeyCode::Right => self.surface.edit_input(|input| input.move_right()),
            KeyCode::Home => self.surface.edit_input(|input| input.move_home()),
            KeyCode::End => self.surface.edit_input(|input| input.move_end()),
            _ => {}
        }
    }

    fn handle_result_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') => {
                self.dispatch(Action::Copy);
            }
            KeyCode::Char('s') => {
                self.dispatch(Action::FetchStats);
            }
            KeyCode::Char('n') => {
                self.dispatch(Action::Reset);
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('b') | KeyCode::Esc => {
                self.dispatch(Action::BackToResult);
            }
            _ => {}
        }
    }
}
