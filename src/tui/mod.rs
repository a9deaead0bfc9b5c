//! Terminal User Interface (TUI) for the focus timer.
//!
//! Full-screen countdown with preset selection and a session badge.
//! Built with ratatui and crossterm.

mod app;
mod event;
mod tick;
mod ui;

pub use app::App;

use std::io::{self, Write};
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tracing::debug;

use crate::cli::commands::Context;
use crate::error::StudyFocusError;
use crate::features::focus::{
    BackgroundRecorder, Clock, CompletionSink, FocusRunner, FocusTimer, IdentityProvider, Preset,
    SqliteAggregateStore, SystemClock,
};
use tick::TickSchedule;

/// Run the full-screen focus timer.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or the terminal fails
/// to initialize or draw.
pub fn run(ctx: &Context, preset: Preset) -> Result<(), StudyFocusError> {
    let store = SqliteAggregateStore::with_database(ctx.open_database()?);
    let recorder = BackgroundRecorder::spawn(store)?;
    let runner = FocusRunner::new(FocusTimer::new(preset), ctx.identity(), SystemClock, recorder);
    let mut app = App::new(runner, ctx.config.focus.bell_on_complete);

    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StudyFocusError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| StudyFocusError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StudyFocusError::Terminal(format!("Failed to create terminal: {e}")))?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    debug!(
        completed = app.timer().completed_sessions(),
        "focus timer closed"
    );
    app.into_runner().into_sink().shutdown();

    result
}

/// Run the main application loop.
fn run_app<B, I, C, S>(
    terminal: &mut Terminal<B>,
    app: &mut App<I, C, S>,
) -> Result<(), StudyFocusError>
where
    B: Backend + Write,
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let mut schedule = TickSchedule::new(Instant::now());

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudyFocusError::Terminal(format!("Failed to draw: {e}")))?;

        if app.take_bell() {
            let backend = terminal.backend_mut();
            write!(backend, "\x07")
                .and_then(|()| Write::flush(backend))
                .map_err(|e| StudyFocusError::Terminal(format!("Failed to ring bell: {e}")))?;
        }

        // Wait for input until the next tick is due
        let action = event::poll_action(schedule.timeout(Instant::now()))?;
        tick::step(app, &mut schedule, action, Instant::now());
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
