//! studyfocus - A Pomodoro focus timer for students
//!
//! This crate provides a focus timer with per-day session accounting, a
//! class timetable with attendance tracking, a course list, a student
//! profile, and a terminal front end.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod storage;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::StudyFocusError;
pub use features::focus::{FocusRunner, FocusTimer, Preset};
