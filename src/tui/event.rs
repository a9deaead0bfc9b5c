//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::StudyFocusError;
use crate::features::focus::Preset;

/// Action to take after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the timer.
    Toggle,
    /// Reset the countdown.
    Reset,
    /// Select a preset.
    Preset(Preset),
    /// Show key help.
    Help,
}

/// Map a key press to an action.
pub fn action_for_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 's') | KeyCode::Enter => Some(Action::Toggle),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char(c @ '1'..='3') => {
            let index = c as usize - '1' as usize;
            Preset::ALL.get(index).copied().map(Action::Preset)
        }
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}

/// Wait up to `timeout` for a key press.
///
/// Returns the action for the key, or `None` on timeout or an unbound key.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_action(timeout: Duration) -> Result<Option<Action>, StudyFocusError> {
    if !event::poll(timeout).map_err(|e| StudyFocusError::Terminal(format!("Event poll failed: {e}")))? {
        return Ok(None);
    }

    match event::read().map_err(|e| StudyFocusError::Terminal(format!("Event read failed: {e}")))? {
        Event::Key(key) => Ok(action_for_key(key)),
        _ => Ok(None),
    }
}
