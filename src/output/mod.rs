//! Output formatting for studyfocus.
//!
//! Every command renders either colored text or pretty-printed JSON.

mod json;
mod pretty;

use chrono::NaiveDate;

use crate::cli::args::OutputFormat;
use crate::error::StudyFocusError;
use crate::features::attendance::ClassEntry;
use crate::features::courses::{Course, CourseSummary};
use crate::features::dashboard::Dashboard;
use crate::features::focus::{FocusReport, Preset};
use crate::features::profile::Profile;

pub use json::*;
pub use pretty::*;

/// Format a timetable based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_timetable(
    entries: &[ClassEntry],
    format: OutputFormat,
) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_timetable_pretty(entries)),
        OutputFormat::Json => format_timetable_json(entries),
    }
}

/// Format a single class based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_class(entry: &ClassEntry, format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_class_pretty(entry)),
        OutputFormat::Json => to_json(entry),
    }
}

/// Format a focus report based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_report(report: &FocusReport, format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_report_pretty(report)),
        OutputFormat::Json => to_json(report),
    }
}

/// Format the dashboard based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_dashboard(dash: &Dashboard, format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_dashboard_pretty(dash)),
        OutputFormat::Json => to_json(dash),
    }
}

/// Format the preset list based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_presets(selected: Preset, format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_presets_pretty(selected)),
        OutputFormat::Json => format_presets_json(selected),
    }
}

/// Format today's focus count based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_focus_today(
    user_id: &str,
    date: NaiveDate,
    count: u32,
    format: OutputFormat,
) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_focus_today_pretty(user_id, date, count)),
        OutputFormat::Json => format_focus_today_json(user_id, date, count),
    }
}

/// Format the course list based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_courses(courses: &[Course], format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_courses_pretty(courses)),
        OutputFormat::Json => to_json(&serde_json::json!({
            "summary": CourseSummary::from_courses(courses),
            "items": courses,
        })),
    }
}

/// Format a profile based on output format
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_profile(profile: &Profile, format: OutputFormat) -> Result<String, StudyFocusError> {
    match format {
        OutputFormat::Pretty => Ok(format_profile_pretty(profile)),
        OutputFormat::Json => to_json(profile),
    }
}
