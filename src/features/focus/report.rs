//! Focus session reports.
//!
//! Summarizes daily aggregates over a trailing window of calendar days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::aggregate::{count_for_day, AggregateStore};
use crate::error::StudyFocusError;

/// Longest window a report may cover.
pub const MAX_REPORT_DAYS: u32 = 365;

/// Sessions completed on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    /// Calendar date
    pub date: NaiveDate,
    /// Completed sessions
    pub sessions: u32,
}

/// Focus report data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusReport {
    /// User the report belongs to
    pub user_id: String,
    /// Per-day counts, oldest first
    pub days: Vec<DailyCount>,
    /// Sessions across the window
    pub total: u32,
    /// Mean sessions per day in the window
    pub average_per_day: f64,
    /// Day with the most sessions (earliest wins ties)
    pub best_day: Option<DailyCount>,
    /// Consecutive days with sessions, ending at the last day of the window
    pub current_streak: u32,
}

impl FocusReport {
    /// Build a report for the `days` calendar days ending at `end_date`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `days` is outside `1..=365`, or
    /// `PersistenceUnavailable` if the store cannot be read.
    pub fn generate<S: AggregateStore + ?Sized>(
        store: &S,
        user_id: &str,
        end_date: NaiveDate,
        days: u32,
    ) -> Result<Self, StudyFocusError> {
        if days == 0 || days > MAX_REPORT_DAYS {
            return Err(StudyFocusError::InvalidInput(format!(
                "report window must be 1-{MAX_REPORT_DAYS} days, got {days}"
            )));
        }

        let start = end_date - Duration::days(i64::from(days) - 1);
        let counts = start
            .iter_days()
            .take(days as usize)
            .map(|date| {
                Ok(DailyCount {
                    date,
                    sessions: count_for_day(store, user_id, date)?,
                })
            })
            .collect::<Result<Vec<_>, StudyFocusError>>()?;

        Ok(Self::from_counts(user_id, counts))
    }

    /// Summarize counts that were already loaded, oldest first.
    #[must_use]
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
    pub fn from_counts(user_id: &str, days: Vec<DailyCount>) -> Self {
        let total = days.iter().map(|d| d.sessions).sum::<u32>();
        let average_per_day = if days.is_empty() {
            0.0
        } else {
            f64::from(total) / days.len() as f64
        };

        let best_day = days
            .iter()
            .filter(|d| d.sessions > 0)
            .fold(None::<DailyCount>, |best, day| match best {
                Some(b) if b.sessions >= day.sessions => Some(b),
                _ => Some(*day),
            });

        let current_streak = days
            .iter()
            .rev()
            .take_while(|d| d.sessions > 0)
            .count() as u32;

        Self {
            user_id: user_id.to_string(),
            days,
            total,
            average_per_day,
            best_day,
            current_streak,
        }
    }

    /// Largest single-day count, at least 1 for bar scaling.
    #[must_use]
    pub fn max_sessions(&self) -> u32 {
        self.days.iter().map(|d| d.sessions).max().unwrap_or(0).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::aggregate::record_completion;
    use crate::features::focus::storage::MemoryAggregateStore;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn seeded(counts: &[(u32, u32)]) -> MemoryAggregateStore {
        let mut store = MemoryAggregateStore::new();
        for &(day, n) in counts {
            for _ in 0..n {
                record_completion(&mut store, "u1", date(day)).unwrap();
            }
        }
        store
    }

    #[test]
    fn test_window_bounds() {
        let store = MemoryAggregateStore::new();
        assert!(matches!(
            FocusReport::generate(&store, "u1", date(10), 0),
            Err(StudyFocusError::InvalidInput(_))
        ));
        assert!(FocusReport::generate(&store, "u1", date(10), 366).is_err());
        assert_eq!(
            FocusReport::generate(&store, "u1", date(10), 365)
                .unwrap()
                .days
                .len(),
            365
        );
    }

    #[test]
    fn test_days_are_oldest_first_and_end_at_end_date() {
        let store = seeded(&[(8, 1), (10, 2)]);
        let report = FocusReport::generate(&store, "u1", date(10), 3).unwrap();

        let dates: Vec<_> = report.days.iter().map(|d| d.date).collect();
        assert_eq!(dates, vec![date(8), date(9), date(10)]);
        let counts: Vec<_> = report.days.iter().map(|d| d.sessions).collect();
        assert_eq!(counts, vec![1, 0, 2]);
        assert_eq!(report.total, 3);
        assert!((report.average_per_day - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_streak_ends_at_end_date() {
        let store = seeded(&[(5, 1), (7, 3), (8, 1), (9, 2)]);

        let report = FocusReport::generate(&store, "u1", date(9), 7).unwrap();
        assert_eq!(report.current_streak, 3);

        // A quiet end date breaks the streak
        let report = FocusReport::generate(&store, "u1", date(10), 7).unwrap();
        assert_eq!(report.current_streak, 0);
    }

    #[test]
    fn test_best_day_prefers_earliest_tie() {
        let store = seeded(&[(3, 2), (4, 2), (5, 1)]);
        let report = FocusReport::generate(&store, "u1", date(5), 5).unwrap();

        assert_eq!(
            report.best_day,
            Some(DailyCount {
                date: date(3),
                sessions: 2
            })
        );
        assert_eq!(report.max_sessions(), 2);
    }

    #[test]
    fn test_empty_history() {
        let report = FocusReport::generate(&MemoryAggregateStore::new(), "u1", date(1), 7).unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.best_day, None);
        assert_eq!(report.current_streak, 0);
        assert_eq!(report.max_sessions(), 1);
    }

    #[test]
    fn test_other_users_not_counted() {
        let mut store = seeded(&[(1, 2)]);
        record_completion(&mut store, "u2", date(1)).unwrap();

        let report = FocusReport::generate(&store, "u2", date(1), 1).unwrap();
        assert_eq!(report.total, 1);
    }

    #[test]
    fn test_serializes_dates_as_iso() {
        let report = FocusReport::from_counts(
            "u1",
            vec![DailyCount {
                date: date(2),
                sessions: 1,
            }],
        );
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["days"][0]["date"], "2024-06-02");
        assert_eq!(json["best_day"]["sessions"], 1);
    }
}
