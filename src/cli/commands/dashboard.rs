//! Dashboard command implementation.

use super::Context;
use crate::error::StudyFocusError;
use crate::features::attendance::TimetableStorage;
use crate::features::dashboard::Dashboard;
use crate::features::focus::{Clock, SqliteAggregateStore, SystemClock};
use crate::output::format_dashboard;

/// Show today's overview.
///
/// # Errors
///
/// Returns an error if no user is set or the database cannot be read.
pub fn dashboard(ctx: &Context) -> Result<String, StudyFocusError> {
    let user = ctx.require_user()?;

    let timetable = TimetableStorage::with_database(ctx.open_database()?);
    let entries = timetable.list_for_user(&user)?;
    let store = SqliteAggregateStore::with_database(timetable.into_database());

    let dash = Dashboard::build(&user, SystemClock.today(), &entries, &store)?;
    format_dashboard(&dash, ctx.format)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::cli::args::OutputFormat;
    use crate::config::{Config, Paths};
    use crate::features::attendance::{weekday_name, ClassEntry};
    use crate::features::focus::record_completion;

    #[test]
    fn test_dashboard_reads_classes_and_sessions() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = Context::new(
            Paths::with_root(temp_dir.path().join(".studyfocus")),
            Config::default(),
            Some(OutputFormat::Json),
            Some("stu-1".to_string()),
        );
        let today = SystemClock.today();

        let db = ctx.open_database().unwrap();
        let timetable = TimetableStorage::with_database(db);
        let weekday = chrono::Datelike::weekday(&today);
        timetable
            .add(&mut ClassEntry::new(
                "stu-1",
                "Algorithms",
                weekday_name(weekday),
                "09:00",
                "Dr. Lee",
                "Room 4",
            ))
            .unwrap();
        let mut store = SqliteAggregateStore::with_database(timetable.into_database());
        record_completion(&mut store, "stu-1", today).unwrap();
        record_completion(&mut store, "stu-1", today).unwrap();

        let json = dashboard(&ctx).unwrap();
        assert!(json.contains("\"focus_sessions\": 2"));
        assert!(json.contains("Algorithms"));
    }
}
