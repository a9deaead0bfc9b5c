//! Focus command implementation.

use std::io::Write;
use std::thread;
use std::time::{Duration, Instant};

use colored::Colorize;

use super::Context;
use crate::cli::args::FocusCommands;
use crate::error::StudyFocusError;
use crate::features::focus::{
    count_for_day, format_mmss, render_progress_bar, BackgroundRecorder, Clock, CompletionSink,
    FocusReport, FocusRunner, FocusTimer, IdentityProvider, Preset, SqliteAggregateStore,
    SystemClock, TimerHost,
};
use crate::output::{
    format_focus_today, format_presets, format_report, sessions_badge, COMPLETION_MESSAGE,
    COMPLETION_TITLE,
};

/// Execute focus subcommands.
///
/// # Errors
///
/// Returns an error if the preset is invalid, no user is set for commands
/// that read history, or the database cannot be read.
pub fn focus(ctx: &Context, cmd: FocusCommands) -> Result<String, StudyFocusError> {
    match cmd {
        FocusCommands::Run { preset, plain } => {
            let preset = match preset {
                Some(minutes) => Preset::from_minutes(minutes)?,
                None => ctx.config.focus.default_preset()?,
            };
            if plain {
                run_plain(ctx, preset)
            } else {
                crate::tui::run(ctx, preset)?;
                Ok(String::new())
            }
        }

        FocusCommands::Today => {
            let user = ctx.require_user()?;
            let store = SqliteAggregateStore::with_database(ctx.open_database()?);
            let today = SystemClock.today();
            let count = count_for_day(&store, &user, today)?;
            format_focus_today(&user, today, count, ctx.format)
        }

        FocusCommands::Report { days } => {
            let user = ctx.require_user()?;
            let store = SqliteAggregateStore::with_database(ctx.open_database()?);
            let report = FocusReport::generate(&store, &user, SystemClock.today(), days)?;
            format_report(&report, ctx.format)
        }

        FocusCommands::Presets => {
            // Still list the choices when the configured default is bad
            let selected = ctx.config.focus.default_preset().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring focus.default_preset_minutes");
                Preset::DEFAULT
            });
            format_presets(selected, ctx.format)
        }
    }
}

/// Run one session in line mode, then drain the recorder.
fn run_plain(ctx: &Context, preset: Preset) -> Result<String, StudyFocusError> {
    let store = SqliteAggregateStore::with_database(ctx.open_database()?);
    let recorder = BackgroundRecorder::spawn(store)?;
    let mut runner = FocusRunner::new(FocusTimer::new(preset), ctx.identity(), SystemClock, recorder);

    if runner.identity().current_user_id().is_none() {
        tracing::warn!("no user set, this session will not be saved");
    }

    let mut stdout = std::io::stdout();
    let completed = run_plain_session(
        &mut runner,
        &mut stdout,
        Duration::from_secs(1),
        ctx.config.focus.bell_on_complete,
    )?;
    runner.into_sink().shutdown();

    Ok(sessions_badge(completed))
}

/// Line-mode host: redraws one status line in place.
struct LineHost<'a, W: Write> {
    out: &'a mut W,
    total: u32,
    bell: bool,
    error: Option<std::io::Error>,
}

impl<W: Write> LineHost<'_, W> {
    fn write_line(&mut self, remaining: u32) -> std::io::Result<()> {
        let elapsed = 1.0 - f64::from(remaining) / f64::from(self.total.max(1));
        write!(
            self.out,
            "\r{} {} ",
            format_mmss(remaining).bold(),
            render_progress_bar(elapsed, 30)
        )?;
        self.out.flush()
    }

    fn record(&mut self, result: std::io::Result<()>) {
        if let Err(e) = result {
            self.error.get_or_insert(e);
        }
    }
}

impl<W: Write> TimerHost for LineHost<'_, W> {
    fn on_tick(&mut self, remaining_seconds: u32) {
        let result = self.write_line(remaining_seconds);
        self.record(result);
    }

    fn on_session_completed(&mut self, _completed_sessions: u32) {
        let bell = if self.bell { "\x07" } else { "" };
        let result = writeln!(
            self.out,
            "\n{bell}{} {}",
            COMPLETION_TITLE.green().bold(),
            COMPLETION_MESSAGE
        );
        self.record(result);
    }
}

/// Count down one session, writing progress to `out`.
///
/// Ticks are scheduled against a fixed deadline so a slow write does not
/// stretch the session. Returns the runner's completed-session count.
///
/// # Errors
///
/// Returns `Terminal` if writing to `out` fails.
pub fn run_plain_session<I, C, S, W>(
    runner: &mut FocusRunner<I, C, S>,
    out: &mut W,
    interval: Duration,
    bell: bool,
) -> Result<u32, StudyFocusError>
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
    W: Write,
{
    let before = runner.timer().completed_sessions();
    let mut host = LineHost {
        out,
        total: runner.timer().duration_seconds(),
        bell,
        error: None,
    };

    let initial = runner.timer().remaining_seconds();
    host.write_line(initial)
        .map_err(|e| StudyFocusError::Terminal(e.to_string()))?;

    runner.start();
    let mut deadline = Instant::now() + interval;

    while runner.timer().completed_sessions() == before {
        let now = Instant::now();
        if deadline > now {
            thread::sleep(deadline - now);
        }
        deadline += interval;

        runner.tick(&mut host);
        if let Some(e) = host.error.take() {
            return Err(StudyFocusError::Terminal(e.to_string()));
        }
    }

    Ok(runner.timer().completed_sessions())
}
