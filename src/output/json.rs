//! JSON output formatting for studyfocus.

use serde::Serialize;
use serde_json::json;

use crate::error::StudyFocusError;
use crate::features::attendance::ClassEntry;
use crate::features::focus::Preset;

/// Format a user's timetable as JSON
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_timetable_json(entries: &[ClassEntry]) -> Result<String, StudyFocusError> {
    let output = json!({
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the preset list as JSON
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_presets_json(selected: Preset) -> Result<String, StudyFocusError> {
    let output = json!({
        "default": selected,
        "presets": Preset::ALL,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format today's focus count as JSON
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn format_focus_today_json(
    user_id: &str,
    date: chrono::NaiveDate,
    count: u32,
) -> Result<String, StudyFocusError> {
    let output = json!({
        "user_id": user_id,
        "date": date,
        "count": count,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Serialize any value as pretty JSON
///
/// # Errors
///
/// Returns `StudyFocusError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, StudyFocusError> {
    Ok(serde_json::to_string_pretty(value)?)
}
