//! Attendance summaries for the dashboard.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::types::{weekday_name, AttendanceStatus, ClassEntry, WEEK};

/// Status counts for the classes scheduled today.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodayStats {
    /// Classes scheduled today
    pub total: u32,
    /// Marked ongoing
    pub ongoing: u32,
    /// Marked late
    pub late: u32,
    /// Marked cancelled
    pub cancelled: u32,
    /// Marked attended
    pub attended: u32,
}

impl TodayStats {
    /// Count the entries that fall on `weekday`.
    #[must_use]
    pub fn from_entries(entries: &[ClassEntry], weekday: Weekday) -> Self {
        entries
            .iter()
            .filter(|e| e.weekday() == Some(weekday))
            .fold(Self::default(), |mut stats, entry| {
                stats.total += 1;
                match entry.status {
                    Some(AttendanceStatus::Ongoing) => stats.ongoing += 1,
                    Some(AttendanceStatus::Late) => stats.late += 1,
                    Some(AttendanceStatus::Cancelled) => stats.cancelled += 1,
                    Some(AttendanceStatus::Attended) => stats.attended += 1,
                    None => {}
                }
                stats
            })
    }

    /// Classes with no status yet.
    #[must_use]
    pub const fn unmarked(&self) -> u32 {
        self.total - self.ongoing - self.late - self.cancelled - self.attended
    }
}

/// Classes per weekday, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklyOverview {
    counts: [u32; 7],
}

impl WeeklyOverview {
    /// Count entries per weekday. Entries whose day is not a weekday are skipped.
    #[must_use]
    pub fn from_entries(entries: &[ClassEntry]) -> Self {
        let mut counts = [0; 7];
        for day in entries.iter().filter_map(ClassEntry::weekday) {
            counts[day.num_days_from_monday() as usize] += 1;
        }
        Self { counts }
    }

    /// Classes on `day`.
    #[must_use]
    pub fn count(&self, day: Weekday) -> u32 {
        self.counts[day.num_days_from_monday() as usize]
    }

    /// `(day, count)` pairs, Monday first.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, u32)> + '_ {
        WEEK.iter().map(|&day| (day, self.count(day)))
    }

    /// Busiest day's count, never below 1.
    #[must_use]
    pub fn max(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0).max(1)
    }

    /// Total classes in the week.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Days with at least one class.
    #[must_use]
    pub fn active_days(&self) -> usize {
        self.counts.iter().filter(|&&c| c > 0).count()
    }
}

impl Serialize for WeeklyOverview {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(WEEK.len()))?;
        for (day, count) in self.iter() {
            map.serialize_entry(weekday_name(day), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(day: &str, status: Option<AttendanceStatus>) -> ClassEntry {
        let mut entry = ClassEntry::new("u1", "Course", day, "09:00", "T", "P");
        entry.status = status;
        entry
    }

    #[test]
    fn test_today_stats_counts_only_today() {
        let entries = vec![
            class("Monday", Some(AttendanceStatus::Ongoing)),
            class("Monday", Some(AttendanceStatus::Late)),
            class("Monday", Some(AttendanceStatus::Attended)),
            class("Monday", None),
            class("Tuesday", Some(AttendanceStatus::Cancelled)),
        ];

        let stats = TodayStats::from_entries(&entries, Weekday::Mon);
        assert_eq!(
            stats,
            TodayStats {
                total: 4,
                ongoing: 1,
                late: 1,
                cancelled: 0,
                attended: 1,
            }
        );
        assert_eq!(stats.unmarked(), 1);

        assert_eq!(TodayStats::from_entries(&entries, Weekday::Sun), TodayStats::default());
    }

    #[test]
    fn test_weekly_overview() {
        let entries = vec![
            class("Monday", None),
            class("Monday", None),
            class("Wednesday", None),
            class("Sunday", None),
            class("Funday", None),
        ];

        let week = WeeklyOverview::from_entries(&entries);
        assert_eq!(week.count(Weekday::Mon), 2);
        assert_eq!(week.count(Weekday::Wed), 1);
        assert_eq!(week.count(Weekday::Sun), 1);
        assert_eq!(week.max(), 2);
        assert_eq!(week.total(), 4);
        assert_eq!(week.active_days(), 3);
        assert_eq!(week.iter().next(), Some((Weekday::Mon, 2)));
    }

    #[test]
    fn test_empty_week_max_is_one() {
        let week = WeeklyOverview::from_entries(&[]);
        assert_eq!(week.max(), 1);
        assert_eq!(week.total(), 0);
    }

    #[test]
    fn test_weekly_overview_json() {
        let week = WeeklyOverview::from_entries(&[class("Friday", None)]);
        let json = serde_json::to_value(week).unwrap();
        assert_eq!(json["Friday"], 1);
        assert_eq!(json["Monday"], 0);
    }
}
