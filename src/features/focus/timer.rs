//! The focus countdown.
//!
//! [`FocusTimer`] is a pure state machine: it never sleeps, never reads the
//! clock and never performs I/O. The host calls [`FocusTimer::tick`] once per
//! elapsed second while the timer is running and reacts to the returned
//! [`TimerEvent`]s.

use super::preset::Preset;
use crate::error::StudyFocusError;

/// Coarse timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Not counting down.
    Idle,
    /// Counting down.
    Running,
}

/// Something the host has to react to after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The countdown moved; carries the value to display.
    Ticked {
        /// Seconds left after this tick (reloaded value after a completion).
        remaining_seconds: u32,
    },
    /// The countdown reached zero.
    SessionCompleted {
        /// Completions since the timer was created, including this one.
        completed_sessions: u32,
    },
}

/// A single-countdown Pomodoro timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusTimer {
    preset: Preset,
    remaining_seconds: u32,
    is_running: bool,
    completed_sessions: u32,
}

impl FocusTimer {
    /// Create an idle timer loaded with `preset`.
    #[must_use]
    pub const fn new(preset: Preset) -> Self {
        Self {
            preset,
            remaining_seconds: preset.seconds(),
            is_running: false,
            completed_sessions: 0,
        }
    }

    /// Start or resume the countdown.
    ///
    /// Does nothing if already running or if nothing is left to count.
    pub fn start(&mut self) {
        if !self.is_running && self.remaining_seconds > 0 {
            self.is_running = true;
        }
    }

    /// Pause the countdown, keeping the exact position.
    pub fn pause(&mut self) {
        self.is_running = false;
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) {
        if self.is_running {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and reload the full preset length.
    ///
    /// The completed-session counter is untouched.
    pub fn reset(&mut self) {
        self.is_running = false;
        self.remaining_seconds = self.preset.seconds();
    }

    /// Select a preset by minutes. Always stops and restarts the countdown at
    /// the new length.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDurationSelection` if `minutes` is not a preset; the
    /// timer is left unchanged.
    pub fn set_duration(&mut self, minutes: u32) -> Result<(), StudyFocusError> {
        let preset = Preset::from_minutes(minutes)?;
        self.set_preset(preset);
        Ok(())
    }

    /// Select a preset. Always stops and restarts the countdown.
    pub fn set_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.reset();
    }

    /// Advance one second, returning the next state and what happened.
    #[must_use]
    pub fn advance(mut self) -> (Self, Vec<TimerEvent>) {
        if !self.is_running || self.remaining_seconds == 0 {
            return (self, Vec::new());
        }

        self.remaining_seconds -= 1;

        if self.remaining_seconds > 0 {
            let remaining_seconds = self.remaining_seconds;
            return (self, vec![TimerEvent::Ticked { remaining_seconds }]);
        }

        self.is_running = false;
        self.completed_sessions += 1;
        self.remaining_seconds = self.preset.seconds();

        let events = vec![
            TimerEvent::SessionCompleted {
                completed_sessions: self.completed_sessions,
            },
            TimerEvent::Ticked {
                remaining_seconds: self.remaining_seconds,
            },
        ];
        (self, events)
    }

    /// Advance one second in place.
    ///
    /// A no-op while idle.
    pub fn tick(&mut self) -> Vec<TimerEvent> {
        let (next, events) = self.advance();
        *self = next;
        events
    }

    /// Seconds left in the current cycle.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// Full cycle length in seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> u32 {
        self.preset.seconds()
    }

    /// Selected preset.
    #[must_use]
    pub const fn preset(&self) -> Preset {
        self.preset
    }

    /// Whether the countdown is active.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        if self.is_running {
            TimerState::Running
        } else {
            TimerState::Idle
        }
    }

    /// Completions since creation. Not persisted.
    #[must_use]
    pub const fn completed_sessions(&self) -> u32 {
        self.completed_sessions
    }

    /// Fraction of the current cycle elapsed (0.0 - 1.0).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let total = f64::from(self.duration_seconds());
        1.0 - f64::from(self.remaining_seconds) / total
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

impl Default for FocusTimer {
    fn default() -> Self {
        Self::new(Preset::DEFAULT)
    }
}

/// Format seconds as MM:SS. Minutes are not wrapped into hours.
#[must_use]
pub fn format_mmss(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 1.0) * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}
