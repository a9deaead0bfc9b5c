//! Host-level effect runner for the focus timer.
//!
//! [`FocusRunner`] applies timer transitions and executes what they emit:
//! UI callbacks go to the [`TimerHost`], completions go to the
//! [`CompletionSink`] keyed by the current user and today's date.

use tracing::debug;

use super::host::{Clock, IdentityProvider, TimerHost};
use super::preset::Preset;
use super::recorder::{CompletionRecord, CompletionSink};
use super::timer::{FocusTimer, TimerEvent};
use crate::error::StudyFocusError;

/// A focus timer wired to its collaborators.
pub struct FocusRunner<I, C, S> {
    timer: FocusTimer,
    identity: I,
    clock: C,
    sink: S,
}

impl<I, C, S> FocusRunner<I, C, S>
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    /// Wrap an existing timer.
    pub const fn new(timer: FocusTimer, identity: I, clock: C, sink: S) -> Self {
        Self {
            timer,
            identity,
            clock,
            sink,
        }
    }

    /// Current timer state.
    pub const fn timer(&self) -> &FocusTimer {
        &self.timer
    }

    /// The completion sink.
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// The identity provider.
    pub const fn identity(&self) -> &I {
        &self.identity
    }

    /// The clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Start or resume.
    pub fn start(&mut self) {
        self.timer.start();
        debug!(remaining = self.timer.remaining_seconds(), "timer started");
    }

    /// Pause.
    pub fn pause(&mut self) {
        self.timer.pause();
        debug!(remaining = self.timer.remaining_seconds(), "timer paused");
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) {
        if self.timer.is_running() {
            self.pause();
        } else {
            self.start();
        }
    }

    /// Stop and reload the preset length.
    pub fn reset(&mut self) {
        self.timer.reset();
        debug!("timer reset");
    }

    /// Select a preset by minutes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDurationSelection` for lengths outside the presets.
    pub fn set_duration(&mut self, minutes: u32) -> Result<(), StudyFocusError> {
        self.timer.set_duration(minutes)?;
        debug!(minutes, "preset selected");
        Ok(())
    }

    /// Select a preset.
    pub fn set_preset(&mut self, preset: Preset) {
        self.timer.set_preset(preset);
        debug!(minutes = preset.minutes(), "preset selected");
    }

    /// Advance one second and run the resulting effects.
    ///
    /// Returns the events that were handled.
    pub fn tick<H: TimerHost + ?Sized>(&mut self, host: &mut H) -> Vec<TimerEvent> {
        let events = self.timer.tick();

        for event in &events {
            match *event {
                TimerEvent::Ticked { remaining_seconds } => host.on_tick(remaining_seconds),
                TimerEvent::SessionCompleted { completed_sessions } => {
                    debug!(completed_sessions, "focus session completed");
                    host.on_session_completed(completed_sessions);
                    self.persist_completion();
                }
            }
        }

        events
    }

    /// Hand today's completion to the sink, or skip when nobody is signed in.
    fn persist_completion(&self) {
        let Some(user_id) = self.identity.current_user_id() else {
            debug!("no signed-in user, completion kept in memory only");
            return;
        };

        self.sink.dispatch(CompletionRecord {
            user_id,
            date: self.clock.today(),
        });
    }

    /// Take back the sink, e.g. to shut down a background recorder.
    pub fn into_sink(self) -> S {
        self.sink
    }
}
