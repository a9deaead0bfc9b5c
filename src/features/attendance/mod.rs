//! Weekly class timetable with attendance tracking.

pub mod stats;
pub mod storage;
pub mod types;

pub use stats::{TodayStats, WeeklyOverview};
pub use storage::TimetableStorage;
pub use types::{parse_weekday, validate, weekday_name, AttendanceStatus, ClassEntry, WEEK};
