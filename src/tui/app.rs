//! Application state for the TUI.

use chrono::NaiveDate;

use crate::features::focus::{
    Clock, CompletionSink, FocusRunner, FocusTimer, IdentityProvider, Preset, TimerHost,
};
use crate::features::motivation::{daily_motivation, Motivation};
use crate::output::{COMPLETION_MESSAGE, COMPLETION_TITLE};
use crate::tui::event::Action;

/// Key help shown in the status bar.
pub const HELP: &str = "space:start/pause | r:reset | 1/2/3:25/50/90 min | q:quit";

/// Screen-side state updated by timer callbacks.
#[derive(Debug, Default)]
pub struct Screen {
    /// Status message to display.
    pub status: Option<String>,
    /// A completion happened and the bell has not been rung yet.
    bell_pending: bool,
    /// Ring the bell on completion.
    bell: bool,
}

impl TimerHost for Screen {
    fn on_session_completed(&mut self, _completed_sessions: u32) {
        self.status = Some(format!("{COMPLETION_TITLE} {COMPLETION_MESSAGE}"));
        self.bell_pending = self.bell;
    }
}

/// Application state.
pub struct App<I, C, S> {
    runner: FocusRunner<I, C, S>,
    /// Screen state.
    pub screen: Screen,
    /// Signed-in user, shown in the header.
    pub user: Option<String>,
    /// Date the app was opened.
    pub date: NaiveDate,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<I, C, S> App<I, C, S>
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    /// Create a new app around `runner`.
    pub fn new(runner: FocusRunner<I, C, S>, bell: bool) -> Self {
        let user = runner.identity().current_user_id();
        let date = runner.clock().today();
        let status = if user.is_some() {
            HELP.to_string()
        } else {
            "Not signed in: sessions are counted but not saved".to_string()
        };

        Self {
            runner,
            screen: Screen {
                status: Some(status),
                bell_pending: false,
                bell,
            },
            user,
            date,
            should_quit: false,
        }
    }

    /// Current timer state.
    pub const fn timer(&self) -> &FocusTimer {
        self.runner.timer()
    }

    /// Quote for the day the app was opened.
    pub fn motivation(&self) -> &'static Motivation {
        daily_motivation(self.date)
    }

    /// Advance the timer by one second.
    pub fn tick(&mut self) {
        self.runner.tick(&mut self.screen);
    }

    /// Apply a key action.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle => {
                self.runner.toggle();
                self.screen.status = Some(if self.runner.timer().is_running() {
                    "Focusing...".to_string()
                } else {
                    "Paused".to_string()
                });
            }
            Action::Reset => {
                self.runner.reset();
                self.screen.status = Some("Reset".to_string());
            }
            Action::Preset(preset) => self.select_preset(preset),
            Action::Help => self.screen.status = Some(HELP.to_string()),
        }
    }

    fn select_preset(&mut self, preset: Preset) {
        self.runner.set_preset(preset);
        self.screen.status = Some(format!("{preset} session selected"));
    }

    /// Whether the bell should ring now. Clears the request.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.screen.bell_pending)
    }

    /// Give back the runner, e.g. to shut down its recorder.
    pub fn into_runner(self) -> FocusRunner<I, C, S> {
        self.runner
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::features::focus::{CompletionRecord, ConfiguredIdentity, FixedClock};

    #[derive(Default)]
    struct CountingSink(Cell<u32>);

    impl CompletionSink for CountingSink {
        fn dispatch(&self, _record: CompletionRecord) {
            self.0.set(self.0.get() + 1);
        }
    }

    fn test_app(
        user: Option<&str>,
    ) -> App<ConfiguredIdentity, FixedClock, CountingSink> {
        let runner = FocusRunner::new(
            FocusTimer::default(),
            ConfiguredIdentity::new(user.map(str::to_string)),
            FixedClock(NaiveDate::from_ymd_opt(2024, 9, 2).unwrap()),
            CountingSink::default(),
        );
        App::new(runner, true)
    }

    #[test]
    fn test_signed_out_status() {
        let app = test_app(None);
        assert!(app.screen.status.as_deref().unwrap().contains("Not signed in"));

        let app = test_app(Some("u1"));
        assert_eq!(app.screen.status.as_deref(), Some(HELP));
        assert_eq!(app.user.as_deref(), Some("u1"));
    }

    #[test]
    fn test_toggle_and_tick() {
        let mut app = test_app(Some("u1"));
        app.apply(Action::Toggle);
        app.tick();
        assert_eq!(app.timer().remaining_seconds(), 1499);
        assert_eq!(app.screen.status.as_deref(), Some("Focusing..."));

        app.apply(Action::Toggle);
        app.tick();
        assert_eq!(app.timer().remaining_seconds(), 1499);
        assert_eq!(app.screen.status.as_deref(), Some("Paused"));
    }

    #[test]
    fn test_completion_sets_message_and_bell() {
        let mut app = test_app(Some("u1"));
        app.apply(Action::Toggle);
        for _ in 0..1500 {
            app.tick();
        }

        assert!(app.screen.status.as_deref().unwrap().contains("Session Complete"));
        assert!(app.take_bell());
        assert!(!app.take_bell());
        assert_eq!(app.timer().completed_sessions(), 1);
        assert_eq!(app.into_runner().sink().0.get(), 1);
    }

    #[test]
    fn test_preset_and_reset() {
        let mut app = test_app(None);
        app.apply(Action::Toggle);
        app.tick();

        app.apply(Action::Preset(Preset::Ninety));
        assert_eq!(app.timer().remaining_seconds(), 5400);
        assert!(!app.timer().is_running());

        app.apply(Action::Toggle);
        app.tick();
        app.apply(Action::Reset);
        assert_eq!(app.timer().remaining_seconds(), 5400);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app(None);
        app.apply(Action::Quit);
        assert!(app.should_quit);
    }
}
