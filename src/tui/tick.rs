//! One-second tick scheduling for the TUI loop.

use std::time::{Duration, Instant};

use crate::features::focus::{Clock, CompletionSink, IdentityProvider};
use crate::tui::app::App;
use crate::tui::event::Action;

/// Deadline for the next timer tick.
#[derive(Debug, Clone, Copy)]
pub struct TickSchedule {
    next: Instant,
    period: Duration,
}

impl TickSchedule {
    pub const PERIOD: Duration = Duration::from_secs(1);

    #[must_use]
    pub fn new(now: Instant) -> Self {
        Self {
            next: now + Self::PERIOD,
            period: Self::PERIOD,
        }
    }

    /// The timer just started from idle: its first tick is a full period away.
    pub fn started(&mut self, now: Instant) {
        self.next = now + self.period;
    }

    /// How long to wait for input before the next tick is due.
    #[must_use]
    pub fn timeout(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    #[must_use]
    pub fn due(&self, now: Instant) -> bool {
        now >= self.next
    }

    /// Move to the next deadline. After a stall the schedule restarts from
    /// `now` instead of firing the missed ticks.
    pub fn advance(&mut self, now: Instant) {
        self.next += self.period;
        if self.next <= now {
            self.next = now + self.period;
        }
    }
}

/// Apply an optional key action, then tick if a tick is due.
///
/// The action goes first so a pause or reset pressed right at the deadline
/// wins over the tick.
pub fn step<I, C, S>(
    app: &mut App<I, C, S>,
    schedule: &mut TickSchedule,
    action: Option<Action>,
    now: Instant,
) where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    if let Some(action) = action {
        let was_running = app.timer().is_running();
        app.apply(action);
        if app.should_quit {
            return;
        }
        if !was_running && app.timer().is_running() {
            schedule.started(now);
        }
    }

    if schedule.due(now) {
        app.tick();
        schedule.advance(now);
    }
}
