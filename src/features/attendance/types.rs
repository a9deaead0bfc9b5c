//! Timetable entries and attendance status.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::StudyFocusError;

/// Days in display order.
pub const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Attendance state of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Class is in progress.
    Ongoing,
    /// Arrived late.
    Late,
    /// Class did not take place.
    Cancelled,
    /// Attended.
    #[serde(alias = "attendance")]
    Attended,
}

impl AttendanceStatus {
    /// Every status, in menu order.
    pub const ALL: [Self; 4] = [Self::Ongoing, Self::Late, Self::Cancelled, Self::Attended];

    /// Stored form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ongoing => "ongoing",
            Self::Late => "late",
            Self::Cancelled => "cancelled",
            Self::Attended => "attended",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = StudyFocusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ongoing" => Ok(Self::Ongoing),
            "late" => Ok(Self::Late),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            "attended" | "attendance" => Ok(Self::Attended),
            other => Err(StudyFocusError::InvalidInput(format!(
                "unknown attendance status '{other}' (expected ongoing, late, cancelled, attended)"
            ))),
        }
    }
}

/// Full English name of a weekday, as stored.
#[must_use]
pub const fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Parse a weekday name or abbreviation, case-insensitively.
#[must_use]
pub fn parse_weekday(s: &str) -> Option<Weekday> {
    s.trim().parse::<Weekday>().ok()
}

/// One weekly class on a user's timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Database id, `None` until saved
    pub id: Option<i64>,
    /// Owner
    pub uid: String,
    /// Course name
    pub course: String,
    /// Weekday name, e.g. "Monday"
    pub day: String,
    /// Free-text time slot, e.g. "09:00-10:30"
    pub time: String,
    /// Teacher
    pub teacher: String,
    /// Room or location
    pub place: String,
    /// Attendance for the current week
    pub status: Option<AttendanceStatus>,
    /// When the entry was first saved
    pub created_at: Option<DateTime<Utc>>,
}

impl ClassEntry {
    /// Create an unsaved entry with no status.
    #[must_use]
    pub fn new(
        uid: impl Into<String>,
        course: impl Into<String>,
        day: impl Into<String>,
        time: impl Into<String>,
        teacher: impl Into<String>,
        place: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            uid: uid.into(),
            course: course.into(),
            day: day.into(),
            time: time.into(),
            teacher: teacher.into(),
            place: place.into(),
            status: None,
            created_at: None,
        }
    }

    /// Weekday the class falls on, if `day` names one.
    #[must_use]
    pub fn weekday(&self) -> Option<Weekday> {
        parse_weekday(&self.day)
    }
}

/// Check that every required field is filled in and `day` is a weekday.
///
/// On success the entry's `day` is normalized to the full weekday name and
/// the text fields are trimmed.
///
/// # Errors
///
/// Returns `InvalidInput` naming the first missing field.
pub fn validate(entry: &mut ClassEntry) -> Result<(), StudyFocusError> {
    for (name, value) in [
        ("uid", &mut entry.uid),
        ("course", &mut entry.course),
        ("day", &mut entry.day),
        ("time", &mut entry.time),
        ("teacher", &mut entry.teacher),
        ("place", &mut entry.place),
    ] {
        *value = value.trim().to_string();
        if value.is_empty() {
            return Err(StudyFocusError::InvalidInput(format!(
                "{name} is required"
            )));
        }
    }

    let day = parse_weekday(&entry.day).ok_or_else(|| {
        StudyFocusError::InvalidInput(format!("'{}' is not a day of the week", entry.day))
    })?;
    entry.day = weekday_name(day).to_string();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> ClassEntry {
        ClassEntry::new("u1", "Algorithms", "monday", "09:00", "Dr. Lee", "Room 4")
    }

    #[test]
    fn test_status_parse_accepts_legacy_value() {
        assert_eq!(
            "attendance".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Attended
        );
        assert_eq!(
            "Late".parse::<AttendanceStatus>().unwrap(),
            AttendanceStatus::Late
        );
        assert!("absent".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Attended).unwrap(),
            "\"attended\""
        );
        let legacy: AttendanceStatus = serde_json::from_str("\"attendance\"").unwrap();
        assert_eq!(legacy, AttendanceStatus::Attended);
    }

    #[test]
    fn test_validate_normalizes_day() {
        let mut e = entry();
        validate(&mut e).unwrap();
        assert_eq!(e.day, "Monday");

        let mut e = entry();
        e.day = "Thu".to_string();
        validate(&mut e).unwrap();
        assert_eq!(e.day, "Thursday");
        assert_eq!(e.weekday(), Some(Weekday::Thu));
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let mut e = entry();
        e.teacher = "   ".to_string();
        let err = validate(&mut e).unwrap_err();
        assert!(err.to_string().contains("teacher is required"));

        let mut e = entry();
        e.place.clear();
        assert!(validate(&mut e).is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_day() {
        let mut e = entry();
        e.day = "Someday".to_string();
        assert!(matches!(validate(&mut e), Err(StudyFocusError::InvalidInput(_))));
    }
}
