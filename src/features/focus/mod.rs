//! Focus timer and session accounting.
//!
//! - Countdown timer over the 25/50/90 minute presets
//! - Effect runner wiring the timer to the UI, identity and clock
//! - Per-user daily completion counts in a key-value store
//! - Trailing reports over those counts

pub mod aggregate;
pub mod host;
pub mod preset;
pub mod recorder;
pub mod report;
pub mod runner;
pub mod storage;
pub mod timer;

pub use aggregate::{aggregate_key, count_for_day, record_completion, AggregateStore, DailyFocusAggregate};
pub use host::{Clock, ConfiguredIdentity, FixedClock, IdentityProvider, SystemClock, TimerHost};
pub use preset::Preset;
pub use recorder::{BackgroundRecorder, CompletionRecord, CompletionSink};
pub use report::{DailyCount, FocusReport, MAX_REPORT_DAYS};
pub use runner::FocusRunner;
pub use storage::{MemoryAggregateStore, SqliteAggregateStore};
pub use timer::{format_mmss, render_progress_bar, FocusTimer, TimerEvent, TimerState};
