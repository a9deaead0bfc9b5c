//! `SQLite` connection for studyfocus.
//!
//! One file under the data directory holds the daily focus aggregates, the
//! timetable, the course list and the academic profile. The schema is
//! brought up to date every time a connection is opened.

use std::path::Path;
use std::time::Duration;

use rusqlite::Connection;

use crate::error::StudyFocusError;

use super::migrations;

/// How long a writer waits on a lock held by another process.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// An open, migrated connection.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open (or create) the database file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `Database` if the file cannot be opened or migrated.
    pub fn open_at(path: &Path) -> Result<Self, StudyFocusError> {
        let conn = Connection::open(path).map_err(|e| {
            StudyFocusError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;
        tracing::debug!(path = %path.display(), "database opened");

        Self::from_connection(conn)
    }

    /// Throwaway database for tests.
    ///
    /// # Errors
    ///
    /// Returns `Database` if migrations fail.
    pub fn open_in_memory() -> Result<Self, StudyFocusError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            StudyFocusError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self, StudyFocusError> {
        // The full-screen timer and one-shot commands may share the file
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| StudyFocusError::Database(format!("Failed to set busy timeout: {e}")))?;
        migrations::run(&conn)?;

        Ok(Self { conn })
    }

    /// Schema version recorded in `PRAGMA user_version`.
    ///
    /// # Errors
    ///
    /// Returns `Database` if the pragma cannot be read.
    pub fn schema_version(&self) -> Result<i32, StudyFocusError> {
        migrations::get_version(&self.conn)
    }

    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_is_migrated() {
        let db = Database::open_in_memory().unwrap();
        assert_eq!(db.schema_version().unwrap(), 1);
    }

    #[test]
    fn test_file_survives_reopen() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("studyfocus.db");

        Database::open_at(&db_path)
            .unwrap()
            .connection()
            .execute(
                "INSERT INTO focus_aggregates (key, data, updated_at) VALUES ('u1_2024-01-01', '{}', '')",
                [],
            )
            .unwrap();
        assert!(db_path.exists());

        let db = Database::open_at(&db_path).unwrap();
        let rows: i64 = db
            .connection()
            .query_row("SELECT COUNT(*) FROM focus_aggregates", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 1);
    }

    #[test]
    fn test_open_in_missing_directory_fails() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nope").join("studyfocus.db");

        assert!(matches!(
            Database::open_at(&db_path),
            Err(StudyFocusError::Database(_))
        ));
    }
}
