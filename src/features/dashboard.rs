//! The daily overview shown by `studyfocus dashboard`.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::StudyFocusError;
use crate::features::attendance::{weekday_name, ClassEntry, TodayStats, WeeklyOverview};
use crate::features::focus::{count_for_day, AggregateStore};
use crate::features::motivation::{daily_motivation, Motivation};

/// Everything the dashboard shows for one user and day.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    /// User the dashboard belongs to
    pub user_id: String,
    /// Local date
    pub date: NaiveDate,
    /// Weekday name of `date`
    pub weekday: &'static str,
    /// Attendance for today's classes
    pub today: TodayStats,
    /// Today's classes
    pub classes: Vec<ClassEntry>,
    /// Classes per weekday
    pub week: WeeklyOverview,
    /// Focus sessions completed today
    pub focus_sessions: u32,
    /// Quote of the day
    pub motivation: &'static Motivation,
}

impl Dashboard {
    /// Assemble the dashboard from the user's timetable and the aggregate store.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceUnavailable` if today's focus count cannot be read.
    pub fn build<S: AggregateStore + ?Sized>(
        user_id: &str,
        date: NaiveDate,
        entries: &[ClassEntry],
        store: &S,
    ) -> Result<Self, StudyFocusError> {
        let weekday = date.weekday();
        let classes = entries
            .iter()
            .filter(|e| e.weekday() == Some(weekday))
            .cloned()
            .collect();

        Ok(Self {
            user_id: user_id.to_string(),
            date,
            weekday: weekday_name(weekday),
            today: TodayStats::from_entries(entries, weekday),
            classes,
            week: WeeklyOverview::from_entries(entries),
            focus_sessions: count_for_day(store, user_id, date)?,
            motivation: daily_motivation(date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::attendance::AttendanceStatus;
    use crate::features::focus::{record_completion, MemoryAggregateStore};

    #[test]
    fn test_build() {
        // 2024-09-02 is a Monday
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).unwrap();
        let mut attended = ClassEntry::new("u1", "Algorithms", "Monday", "09:00", "Dr. Lee", "R4");
        attended.status = Some(AttendanceStatus::Attended);
        let entries = vec![
            attended,
            ClassEntry::new("u1", "Physics", "Tuesday", "11:00", "Dr. Kim", "Lab"),
        ];

        let mut store = MemoryAggregateStore::new();
        record_completion(&mut store, "u1", date).unwrap();
        record_completion(&mut store, "u1", date).unwrap();

        let dash = Dashboard::build("u1", date, &entries, &store).unwrap();
        assert_eq!(dash.weekday, "Monday");
        assert_eq!(dash.today.total, 1);
        assert_eq!(dash.today.attended, 1);
        assert_eq!(dash.classes.len(), 1);
        assert_eq!(dash.week.total(), 2);
        assert_eq!(dash.focus_sessions, 2);
        assert_eq!(dash.motivation, daily_motivation(date));
    }
}
