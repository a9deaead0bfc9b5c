//! Database migrations for studyfocus.
//!
//! Each migration is a function that upgrades the schema by one version.
//! Migrations are run automatically when the database is opened.

use rusqlite::Connection;

use crate::error::StudyFocusError;

/// Current schema version.
const CURRENT_VERSION: i32 = 1;

/// Get the current schema version from the database.
///
/// Returns 0 if no version has been set (new database).
pub fn get_version(conn: &Connection) -> Result<i32, StudyFocusError> {
    let version: i32 = conn
        .query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StudyFocusError::Database(format!("Failed to get schema version: {e}")))?;

    Ok(version)
}

/// Set the schema version in the database.
fn set_version(conn: &Connection, version: i32) -> Result<(), StudyFocusError> {
    conn.execute_batch(&format!("PRAGMA user_version = {version};"))
        .map_err(|e| StudyFocusError::Database(format!("Failed to set schema version: {e}")))
}

/// Run all pending migrations.
pub fn run(conn: &Connection) -> Result<(), StudyFocusError> {
    let current = get_version(conn)?;

    if current >= CURRENT_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=CURRENT_VERSION {
        tracing::debug!(version, "running migration");
        run_migration(conn, version)?;
        set_version(conn, version)?;
    }

    Ok(())
}

/// Run a specific migration.
fn run_migration(conn: &Connection, version: i32) -> Result<(), StudyFocusError> {
    match version {
        1 => migrate_v1(conn),
        _ => Err(StudyFocusError::Database(format!(
            "Unknown migration version: {version}"
        ))),
    }
}

/// Migration v1: Initial schema.
///
/// Creates tables for:
/// - `focus_aggregates`: per-user, per-day focus documents (JSON)
/// - `timetable_entries`: weekly classes with attendance status
/// - `courses`: enrolled courses per semester
/// - `profiles`: display name and the one-time academic record
fn migrate_v1(conn: &Connection) -> Result<(), StudyFocusError> {
    conn.execute_batch(
        r"
        -- Daily focus aggregates, keyed by '{user}_{YYYY-MM-DD}'
        CREATE TABLE IF NOT EXISTS focus_aggregates (
            key TEXT PRIMARY KEY,
            data TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );

        -- Weekly timetable
        CREATE TABLE IF NOT EXISTS timetable_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            uid TEXT NOT NULL,
            course TEXT NOT NULL,
            day TEXT NOT NULL,
            time TEXT NOT NULL,
            teacher TEXT NOT NULL,
            place TEXT NOT NULL,
            status TEXT,
            created_at TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_timetable_uid
        ON timetable_entries(uid);

        CREATE INDEX IF NOT EXISTS idx_timetable_uid_day
        ON timetable_entries(uid, day);

        -- Course list
        CREATE TABLE IF NOT EXISTS courses (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            uid TEXT NOT NULL,
            semester TEXT NOT NULL,
            code TEXT NOT NULL,
            title TEXT NOT NULL,
            credit INTEGER NOT NULL,
            kind TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_courses_uid
        ON courses(uid);

        -- One row per user; academic columns are written once
        CREATE TABLE IF NOT EXISTS profiles (
            uid TEXT PRIMARY KEY,
            display_name TEXT,
            country TEXT,
            university TEXT,
            degree TEXT,
            department TEXT,
            academic_info_saved INTEGER NOT NULL DEFAULT 0,
            updated_at TEXT NOT NULL
        );
        ",
    )
    .map_err(|e| StudyFocusError::Database(format!("Migration v1 failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migration_v1() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);

        conn.execute(
            "INSERT INTO focus_aggregates (key, data, updated_at)
             VALUES ('u1_2024-01-01', '{\"count\":1}', '2024-01-01T10:00:00Z')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO timetable_entries (uid, course, day, time, teacher, place)
             VALUES ('u1', 'Algorithms', 'Monday', '09:00', 'Dr. Lee', 'Room 4')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO courses (uid, semester, code, title, credit, kind, created_at)
             VALUES ('u1', 'Fall 2024', 'CS201', 'Algorithms', 3, 'Core', '2024-09-01T10:00:00Z')",
            [],
        )
        .unwrap();

        conn.execute(
            "INSERT INTO profiles (uid, display_name, updated_at)
             VALUES ('u1', 'Sam', '2024-09-01T10:00:00Z')",
            [],
        )
        .unwrap();
    }

    #[test]
    fn test_migration_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        run(&conn).unwrap();
        run(&conn).unwrap();

        assert_eq!(get_version(&conn).unwrap(), CURRENT_VERSION);
    }

    #[test]
    fn test_get_version_new_database() {
        let conn = Connection::open_in_memory().unwrap();

        assert_eq!(get_version(&conn).unwrap(), 0);
    }
}
