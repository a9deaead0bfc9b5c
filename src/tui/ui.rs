//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Tabs},
    Frame,
};

use crate::features::focus::{Clock, CompletionSink, IdentityProvider, Preset, TimerState};
use crate::output::sessions_badge;
use crate::tui::app::{App, HELP};

/// Render the application UI.
pub fn render<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    // Create layout: header, countdown, gauge, presets, badge, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(5),    // Countdown
            Constraint::Length(3), // Gauge
            Constraint::Length(3), // Presets
            Constraint::Length(1), // Badge
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_countdown(frame, app, chunks[1]);
    render_gauge(frame, app, chunks[2]);
    render_presets(frame, app, chunks[3]);
    render_badge(frame, app, chunks[4]);
    render_status_bar(frame, app, chunks[5]);
}

/// Render the header with the user and the quote of the day.
fn render_header<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>, area: Rect)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let who = app.user.as_deref().unwrap_or("not signed in");
    let motivation = app.motivation();

    let lines = vec![
        Line::from(vec![
            Span::styled(
                "Focus & Productivity",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {who} · {}", app.date.format("%A %Y-%m-%d")),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(Span::styled(
            format!("{} {}", motivation.emoji, motivation.quote),
            Style::default().add_modifier(Modifier::ITALIC),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the remaining time.
fn render_countdown<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>, area: Rect)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let timer = app.timer();
    let (label, color) = match timer.state() {
        TimerState::Running => ("FOCUSING", Color::Green),
        TimerState::Idle if timer.remaining_seconds() < timer.duration_seconds() => {
            ("PAUSED", Color::Yellow)
        }
        TimerState::Idle => ("READY", Color::White),
    };

    // Vertically center the two lines
    let pad = usize::from(area.height.saturating_sub(4) / 2);
    let mut lines = vec![Line::default(); pad];
    lines.push(Line::from(Span::styled(
        timer.format_remaining(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(label, Style::default().fg(Color::DarkGray))));

    let countdown = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Focus Timer "));

    frame.render_widget(countdown, area);
}

/// Render progress through the current session.
fn render_gauge<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>, area: Rect)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let progress = app.timer().progress().clamp(0.0, 1.0);

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(Color::Green))
        .ratio(progress)
        .label(format!("{:.0}%", progress * 100.0));

    frame.render_widget(gauge, area);
}

/// Render the preset selector.
fn render_presets<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>, area: Rect)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let titles = Preset::ALL
        .iter()
        .map(|p| format!("{} {p}", p.index() + 1))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.timer().preset().index())
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL).title(" Duration "));

    frame.render_widget(tabs, area);
}

/// Render the completed-session badge.
fn render_badge<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>, area: Rect)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let badge = Paragraph::new(format!(
        "🎯 {}",
        sessions_badge(app.timer().completed_sessions())
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::Magenta));

    frame.render_widget(badge, area);
}

/// Render the status bar.
fn render_status_bar<I, C, S>(frame: &mut Frame<'_>, app: &App<I, C, S>, area: Rect)
where
    I: IdentityProvider,
    C: Clock,
    S: CompletionSink,
{
    let status_text = app.screen.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}
